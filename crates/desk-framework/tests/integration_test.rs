//! End-to-end exercise of the generic view-model: a small entity, a screen
//! wrapper built on [`FormClient`], and a scripted gateway.

use desk_framework::mock::MockGateway;
use desk_framework::{
    field, FieldCheck, FieldSpec, Form, FormClient, FormEntity, FormHandle, FormViewModel,
    ValidationError,
};

#[derive(Clone, Debug, PartialEq)]
struct Tag {
    id: u32,
    label: String,
}

#[derive(Clone, Debug, PartialEq)]
struct TagDraft {
    label: String,
}

static TAG_SCHEMA: [FieldSpec; 1] = [field("label", "")];

impl FormEntity for Tag {
    type Draft = TagDraft;
    type Scope = ();

    const NOUN: &'static str = "tag";
    const PLURAL: &'static str = "tags";

    fn schema() -> &'static [FieldSpec] {
        &TAG_SCHEMA
    }

    fn id(&self) -> u32 {
        self.id
    }

    fn fill(&self, form: &Form) {
        form.set("label", self.label.clone());
    }

    fn check_field(name: &str, value: &str) -> FieldCheck {
        match name {
            "label" if value.trim().is_empty() => {
                FieldCheck::Invalid("Label is required".to_string())
            }
            "label" => FieldCheck::Valid,
            _ => FieldCheck::Skipped,
        }
    }

    fn draft(form: &Form) -> Result<TagDraft, ValidationError> {
        let label = form.value("label").trim().to_string();
        if label.is_empty() {
            return Err(ValidationError("Label is required".to_string()));
        }
        Ok(TagDraft { label })
    }
}

/// Screen wrapper in the style an application would write.
struct TagsScreen {
    handle: FormHandle<Tag>,
}

impl TagsScreen {
    fn new(handle: FormHandle<Tag>) -> Self {
        Self { handle }
    }

    async fn load(&self) -> Result<(), desk_framework::FrameworkError> {
        self.handle.load(()).await
    }

    async fn create_tag(&self) -> Result<(), desk_framework::FrameworkError> {
        self.handle.create(()).await
    }

    async fn delete_selected(&self) -> Result<(), desk_framework::FrameworkError> {
        self.handle.delete_selected(()).await
    }
}

impl FormClient<Tag> for TagsScreen {
    fn handle(&self) -> &FormHandle<Tag> {
        &self.handle
    }
}

fn tag(id: u32, label: &str) -> Tag {
    Tag {
        id,
        label: label.to_string(),
    }
}

#[tokio::test]
async fn test_full_screen_lifecycle() {
    let mock = MockGateway::new();
    mock.expect_list().return_ok(vec![tag(1, "red"), tag(2, "blue")]);
    mock.expect_create().return_ok(tag(3, "green"));
    mock.expect_delete().return_ok();

    let (vm, handle) = FormViewModel::new(mock.clone(), 8);
    let actor = tokio::spawn(vm.run());
    let screen = TagsScreen::new(handle);

    // Load and render.
    screen.load().await.unwrap();
    assert_eq!(screen.items().len(), 2);
    assert_eq!(screen.status(), "Loaded 2 tags");

    // Create through the form.
    screen.set_field("label", "green").await.unwrap();
    screen.create_tag().await.unwrap();
    assert_eq!(screen.items().first().map(|t| t.id), Some(3));
    assert_eq!(screen.selected(), Some(tag(3, "green")));
    assert_eq!(screen.status(), "Created tag ID 3");

    // Delete the new selection.
    screen.delete_selected().await.unwrap();
    assert_eq!(screen.items().len(), 2);
    assert!(!screen.has_selection());
    assert_eq!(screen.status(), "Deleted tag ID 3");

    mock.verify();

    // Dropping the screen (and with it the handle) shuts the actor down.
    drop(screen);
    actor.await.unwrap();
}

#[tokio::test]
async fn test_status_transitions_are_observable() {
    let mock = MockGateway::new();
    mock.expect_list().return_ok(vec![tag(1, "red")]);

    let (vm, handle) = FormViewModel::new(mock, 8);
    tokio::spawn(vm.run());

    let mut status = handle.watch_status();
    handle.load(()).await.unwrap();

    // The watch retains the final value of the settled operation.
    status.changed().await.unwrap();
    assert_eq!(*status.borrow_and_update(), "Loaded 1 tags");
}

#[tokio::test]
async fn test_overlapping_loads_settle_on_the_later_response() {
    let mock = MockGateway::new();
    mock.expect_list().return_ok(vec![tag(1, "red")]);
    mock.expect_list().return_ok(vec![tag(2, "blue")]);

    let (vm, handle) = FormViewModel::new(mock, 8);
    tokio::spawn(vm.run());

    // Issue both loads before awaiting either; the mailbox serializes them.
    let first = handle.load(());
    let second = handle.load(());
    let (a, b) = tokio::join!(first, second);
    a.unwrap();
    b.unwrap();

    assert_eq!(handle.items(), vec![tag(2, "blue")]);
}
