//! Form contract for the products screen.

use crate::forms::{
    blank_to_none, check_count, check_number, check_optional_count, optional_count, require_count,
    require_number,
};
use crate::model::{Product, ProductDraft};
use desk_framework::{field, FieldCheck, FieldSpec, Form, FormEntity, ValidationError};

static SCHEMA: [FieldSpec; 7] = [
    field("name", ""),
    field("description", ""),
    field("price", ""),
    field("stock", ""),
    field("provider_id", ""),
    field("created_at", ""),
    field("updated_at", ""),
];

impl FormEntity for Product {
    type Draft = ProductDraft;
    type Scope = ();

    const NOUN: &'static str = "product";
    const PLURAL: &'static str = "products";

    fn schema() -> &'static [FieldSpec] {
        &SCHEMA
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn fill(&self, form: &Form) {
        form.set("name", self.name.clone());
        form.set("description", self.description.clone().unwrap_or_default());
        form.set("price", self.price.to_string());
        form.set("stock", self.stock.to_string());
        form.set(
            "provider_id",
            self.provider_id.map(|id| id.to_string()).unwrap_or_default(),
        );
        form.set("created_at", self.created_at.clone().unwrap_or_default());
        form.set("updated_at", self.updated_at.clone().unwrap_or_default());
    }

    fn check_field(name: &str, value: &str) -> FieldCheck {
        match name {
            "price" => check_number("Price", value),
            "stock" => check_count("Stock", value),
            "provider_id" => check_optional_count("Provider ID", value),
            _ => FieldCheck::Skipped,
        }
    }

    fn draft(form: &Form) -> Result<ProductDraft, ValidationError> {
        let name = form.value("name").trim().to_string();
        if name.is_empty() {
            return Err(ValidationError("Name is required".to_string()));
        }
        let price = require_number("Price", &form.value("price"))?;
        let stock = require_count("Stock", &form.value("stock"))?;
        let provider_id = optional_count("Provider ID", &form.value("provider_id"))?;
        Ok(ProductDraft {
            name,
            description: blank_to_none(form.value("description")),
            price,
            stock,
            provider_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> Form {
        Form::new(Product::schema())
    }

    #[test]
    fn test_blank_name_is_the_first_reason() {
        // Even with other fields invalid, a blank name is reported first.
        let f = form();
        f.set("price", "5");
        assert_eq!(
            Product::draft(&f),
            Err(ValidationError("Name is required".into()))
        );
    }

    #[test]
    fn test_draft_numeric_fields() {
        let f = form();
        f.set("name", "Widget");
        f.set("price", "12.50");
        f.set("stock", "4");
        let draft = Product::draft(&f).unwrap();
        assert_eq!(draft.price, 12.5);
        assert_eq!(draft.stock, 4);
        assert_eq!(draft.provider_id, None);
        assert_eq!(draft.description, None);
    }

    #[test]
    fn test_draft_rejects_negative_price() {
        let f = form();
        f.set("name", "Widget");
        f.set("price", "-3");
        f.set("stock", "1");
        assert_eq!(
            Product::draft(&f),
            Err(ValidationError("Price must be >= 0".into()))
        );
    }

    #[test]
    fn test_draft_parses_provider() {
        let f = form();
        f.set("name", "Widget");
        f.set("price", "1");
        f.set("stock", "0");
        f.set("provider_id", "9");
        assert_eq!(Product::draft(&f).unwrap().provider_id, Some(9));
    }

    #[test]
    fn test_live_checks() {
        assert_eq!(
            Product::check_field("price", "abc"),
            FieldCheck::Invalid("Price must be numeric".into())
        );
        assert_eq!(
            Product::check_field("stock", "-1"),
            FieldCheck::Invalid("Stock must be >= 0".into())
        );
        // Blank provider is explicitly fine: it means "no provider".
        assert_eq!(Product::check_field("provider_id", ""), FieldCheck::Valid);
        assert_eq!(Product::check_field("description", ""), FieldCheck::Skipped);
    }

    #[test]
    fn test_fill_renders_numbers_as_text() {
        let f = form();
        let product = Product {
            id: 2,
            name: "Widget".into(),
            description: None,
            price: 9.5,
            stock: 3,
            provider_id: Some(7),
            created_at: None,
            updated_at: None,
        };
        product.fill(&f);
        assert_eq!(f.value("price"), "9.5");
        assert_eq!(f.value("stock"), "3");
        assert_eq!(f.value("provider_id"), "7");
        assert_eq!(f.value("description"), "");
    }
}
