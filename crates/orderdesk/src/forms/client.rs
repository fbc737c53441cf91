//! Form contract for the clients screen.

use crate::forms::blank_to_none;
use crate::model::{Client, ClientDraft};
use desk_framework::{field, FieldCheck, FieldSpec, Form, FormEntity, ValidationError};

static SCHEMA: [FieldSpec; 6] = [
    field("name", ""),
    field("email", ""),
    field("phone", ""),
    field("address", ""),
    field("created_at", ""),
    field("updated_at", ""),
];

impl FormEntity for Client {
    type Draft = ClientDraft;
    type Scope = ();

    const NOUN: &'static str = "client";
    const PLURAL: &'static str = "clients";

    fn schema() -> &'static [FieldSpec] {
        &SCHEMA
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn fill(&self, form: &Form) {
        form.set("name", self.name.clone());
        form.set("email", self.email.clone());
        form.set("phone", self.phone.clone().unwrap_or_default());
        form.set("address", self.address.clone().unwrap_or_default());
        form.set("created_at", self.created_at.clone().unwrap_or_default());
        form.set("updated_at", self.updated_at.clone().unwrap_or_default());
    }

    fn check_field(name: &str, value: &str) -> FieldCheck {
        match name {
            "email" if value.trim().is_empty() => {
                FieldCheck::Invalid("Email is required".to_string())
            }
            "email" if !value.contains('@') => {
                FieldCheck::Invalid("Invalid email format".to_string())
            }
            "email" => FieldCheck::Valid,
            _ => FieldCheck::Skipped,
        }
    }

    fn draft(form: &Form) -> Result<ClientDraft, ValidationError> {
        let name = form.value("name").trim().to_string();
        if name.is_empty() {
            return Err(ValidationError("Name is required".to_string()));
        }
        let email = form.value("email").trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(ValidationError("Valid email is required".to_string()));
        }
        Ok(ClientDraft {
            name,
            email,
            phone: blank_to_none(form.value("phone")),
            address: blank_to_none(form.value("address")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> Form {
        Form::new(Client::schema())
    }

    #[test]
    fn test_draft_requires_name_first() {
        let f = form();
        f.set("email", "ann@x.com");
        assert_eq!(
            Client::draft(&f),
            Err(ValidationError("Name is required".into()))
        );
    }

    #[test]
    fn test_draft_requires_valid_email() {
        let f = form();
        f.set("name", "Ann");
        f.set("email", "not-an-email");
        assert_eq!(
            Client::draft(&f),
            Err(ValidationError("Valid email is required".into()))
        );
    }

    #[test]
    fn test_draft_maps_blank_optionals_to_none() {
        let f = form();
        f.set("name", "  Ann ");
        f.set("email", " ann@x.com ");
        f.set("phone", "  ");
        f.set("address", "1 Main St");
        let draft = Client::draft(&f).unwrap();
        assert_eq!(draft.name, "Ann");
        assert_eq!(draft.email, "ann@x.com");
        assert_eq!(draft.phone, None);
        assert_eq!(draft.address.as_deref(), Some("1 Main St"));
    }

    #[test]
    fn test_email_live_check() {
        assert_eq!(
            Client::check_field("email", ""),
            FieldCheck::Invalid("Email is required".into())
        );
        assert_eq!(
            Client::check_field("email", "nope"),
            FieldCheck::Invalid("Invalid email format".into())
        );
        assert_eq!(Client::check_field("email", "a@b"), FieldCheck::Valid);
        assert_eq!(Client::check_field("name", ""), FieldCheck::Skipped);
    }

    #[test]
    fn test_fill_renders_absent_fields_empty() {
        let f = form();
        let client = Client {
            id: 3,
            name: "Ann".into(),
            email: "ann@x.com".into(),
            phone: None,
            address: None,
            created_at: Some("2024-01-01".into()),
            updated_at: None,
        };
        client.fill(&f);
        assert_eq!(f.value("name"), "Ann");
        assert_eq!(f.value("phone"), "");
        assert_eq!(f.value("created_at"), "2024-01-01");
    }
}
