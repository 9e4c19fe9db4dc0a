use catalogue_application::category::{
    CategoryDto, CreateCategory, CreateCategoryHandler, DeleteCategory, DeleteCategoryHandler,
    GetCategoryById, GetCategoryByIdHandler, InMemoryCategoryGateway, ListCategories,
    ListCategoriesHandler, UpdateCategory, UpdateCategoryHandler,
};
use catalogue_application::command_bus::CommandBus;
use catalogue_application::context::AppContext;
use catalogue_application::error::AppError;
use catalogue_application::query_bus::QueryBus;
use catalogue_application::{InMemoryCommandBus, InMemoryQueryBus};
use catalogue_domain::category::{
    CategoryGateway, CategoryId, CategorySearchQuery, NAME_BLANK, NAME_NULL,
};
use catalogue_domain::clock::ManualClock;
use catalogue_domain::error::DomainError;
use chrono::Duration;
use std::io;
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

struct App {
    commands: InMemoryCommandBus,
    queries: InMemoryQueryBus,
    gateway: Arc<InMemoryCategoryGateway>,
    clock: Arc<ManualClock>,
}

// 收集格式化后的日志输出
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn app() -> App {
    init_tracing();
    let gateway = Arc::new(InMemoryCategoryGateway::new());
    let clock = Arc::new(ManualClock::default());
    let shared: Arc<dyn CategoryGateway> = gateway.clone();

    let commands = InMemoryCommandBus::new();
    commands
        .register::<CreateCategory, _>(Arc::new(CreateCategoryHandler::with_clock(
            shared.clone(),
            clock.clone(),
        )))
        .unwrap();
    commands
        .register::<UpdateCategory, _>(Arc::new(UpdateCategoryHandler::with_clock(
            shared.clone(),
            clock.clone(),
        )))
        .unwrap();
    commands
        .register::<DeleteCategory, _>(Arc::new(DeleteCategoryHandler::new(shared.clone())))
        .unwrap();

    let queries = InMemoryQueryBus::new();
    queries
        .register::<GetCategoryById, _>(Arc::new(GetCategoryByIdHandler::new(shared.clone())))
        .unwrap();
    queries
        .register::<ListCategories, _>(Arc::new(ListCategoriesHandler::new(shared)))
        .unwrap();

    App {
        commands,
        queries,
        gateway,
        clock,
    }
}

fn create(name: Option<&str>, is_active: bool) -> CreateCategory {
    CreateCategory {
        name: name.map(str::to_string),
        description: Some("Category most view".to_string()),
        is_active,
    }
}

impl App {
    async fn get(&self, id: &CategoryId) -> Result<CategoryDto, AppError> {
        self.queries
            .dispatch(&AppContext::default(), GetCategoryById { id: id.clone() })
            .await
    }
}

fn validation_messages(err: AppError) -> Vec<String> {
    match err {
        AppError::Domain(DomainError::Validation { errors, .. }) => {
            errors.iter().map(|e| e.message().to_string()).collect()
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn create_then_get_returns_persisted_category() {
    let app = app();
    let ctx = AppContext::builder()
        .correlation_id("cor-1".to_string())
        .build();

    let id = app
        .commands
        .dispatch(&ctx, create(Some("Movies"), true))
        .await
        .unwrap();

    let dto = app.get(&id).await.unwrap();
    assert_eq!(dto.id, id.to_string());
    assert_eq!(dto.name.as_deref(), Some("Movies"));
    assert!(dto.is_active);
    assert_eq!(dto.created_at, dto.updated_at);
    assert_eq!(dto.deleted_at, None);
}

#[tokio::test]
async fn invalid_category_is_not_persisted() {
    let app = app();
    let ctx = AppContext::default();

    let err = app
        .commands
        .dispatch(&ctx, create(None, true))
        .await
        .unwrap_err();
    assert_eq!(validation_messages(err), vec![NAME_NULL]);

    let err = app
        .commands
        .dispatch(&ctx, create(Some("   "), true))
        .await
        .unwrap_err();
    assert_eq!(validation_messages(err), vec![NAME_BLANK]);

    assert!(app.gateway.is_empty());
}

#[tokio::test]
async fn update_replaces_fields_and_deactivates() {
    let app = app();
    let ctx = AppContext::default();
    let id = app
        .commands
        .dispatch(&ctx, create(Some("Revolutions"), true))
        .await
        .unwrap();
    let before = app.get(&id).await.unwrap();

    app.clock.advance(Duration::seconds(5));
    let updated_id = app
        .commands
        .dispatch(
            &ctx,
            UpdateCategory {
                id: id.clone(),
                name: Some("Matrix".to_string()),
                description: None,
                is_active: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated_id, id);

    let after = app.get(&id).await.unwrap();
    assert_eq!(after.name.as_deref(), Some("Matrix"));
    assert_eq!(after.description, None);
    assert!(!after.is_active);
    assert_eq!(after.created_at, before.created_at);
    assert_eq!(after.updated_at, before.updated_at + Duration::seconds(5));
    assert_eq!(after.deleted_at, Some(after.updated_at));
}

#[tokio::test]
async fn invalid_update_keeps_stored_state() {
    let app = app();
    let ctx = AppContext::default();
    let id = app
        .commands
        .dispatch(&ctx, create(Some("Movies"), true))
        .await
        .unwrap();

    let err = app
        .commands
        .dispatch(
            &ctx,
            UpdateCategory {
                id: id.clone(),
                name: Some(" ".to_string()),
                description: None,
                is_active: true,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(validation_messages(err), vec![NAME_BLANK]);
    assert_eq!(app.get(&id).await.unwrap().name.as_deref(), Some("Movies"));
}

#[tokio::test]
async fn update_of_unknown_category_is_not_found() {
    let app = app();
    let err = app
        .commands
        .dispatch(
            &AppContext::default(),
            UpdateCategory {
                id: CategoryId::unique(),
                name: Some("Movies".to_string()),
                description: None,
                is_active: true,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::AggregateNotFound(_)));
}

#[tokio::test]
async fn delete_removes_category_and_tolerates_repeats() {
    let app = app();
    let ctx = AppContext::default();
    let id = app
        .commands
        .dispatch(&ctx, create(Some("Movies"), true))
        .await
        .unwrap();

    app.commands
        .dispatch(&ctx, DeleteCategory { id: id.clone() })
        .await
        .unwrap();
    app.commands
        .dispatch(&ctx, DeleteCategory { id: id.clone() })
        .await
        .unwrap();

    assert!(matches!(
        app.get(&id).await.unwrap_err(),
        AppError::AggregateNotFound(_)
    ));
}

#[tokio::test]
async fn list_pages_through_matching_categories() {
    let app = app();
    let ctx = AppContext::default();
    for name in ["Movies", "Series", "Documentaries", "Kids", "Music"] {
        let cmd = CreateCategory {
            name: Some(name.to_string()),
            description: None,
            is_active: true,
        };
        app.commands.dispatch(&ctx, cmd).await.unwrap();
    }

    let page = app
        .queries
        .dispatch(
            &ctx,
            ListCategories {
                query: CategorySearchQuery::builder().terms("m").per_page(2).build(),
            },
        )
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    let names: Vec<_> = page.items.iter().filter_map(|i| i.name.as_deref()).collect();
    assert_eq!(names, vec!["Documentaries", "Movies"]);

    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["per_page"], 2);
    assert_eq!(json["items"][0]["is_active"], true);
}

#[tokio::test]
async fn unknown_sort_field_surfaces_as_domain_error() {
    let app = app();
    let err = app
        .queries
        .dispatch(
            &AppContext::default(),
            ListCategories {
                query: CategorySearchQuery::builder().sort("colour").build(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Domain(DomainError::InvalidValue { .. })
    ));
}

#[tokio::test]
async fn command_events_record_correlation_and_actor() {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(captured.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = app();
    let ctx = AppContext::builder()
        .correlation_id("cor-7".to_string())
        .actor_id("editor-42".to_string())
        .build();

    let id = app
        .commands
        .dispatch(&ctx, create(Some("Movies"), true))
        .await
        .unwrap();
    app.commands
        .dispatch(&ctx, DeleteCategory { id })
        .await
        .unwrap();

    let logs = captured.text();
    let created = logs
        .lines()
        .find(|l| l.contains("category created"))
        .expect("create event");
    assert!(created.contains("cor-7"));
    assert!(created.contains("editor-42"));
    let deleted = logs
        .lines()
        .find(|l| l.contains("category deleted"))
        .expect("delete event");
    assert!(deleted.contains("editor-42"));
}
