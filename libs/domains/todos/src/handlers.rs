use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::TodoResult;
use crate::models::TodoItem;
use crate::repository::TodoRepository;
use crate::service::TodoItemService;

/// OpenAPI documentation for the todo items API
#[derive(OpenApi)]
#[openapi(
    paths(list_todo_items, get_todo_item, create_todo_item, update_todo_item),
    components(schemas(TodoItem, axum_helpers::ErrorResponse)),
    tags(
        (name = "todoitems", description = "Todo item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the todo items router; nest it under `/api/todoitems`.
pub fn router<R: TodoRepository + 'static>(service: TodoItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_todo_items).post(create_todo_item))
        .route("/{id}", get(get_todo_item).put(update_todo_item))
        .with_state(shared_service)
}

/// List all incomplete todo items
#[utoipa::path(
    get,
    path = "",
    tag = "todoitems",
    responses(
        (status = 200, description = "List of incomplete todo items", body = Vec<TodoItem>),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorResponse)
    )
)]
async fn list_todo_items<R: TodoRepository>(
    State(service): State<Arc<TodoItemService<R>>>,
) -> TodoResult<Json<Vec<TodoItem>>> {
    let items = service.list_todo_items().await?;
    Ok(Json(items))
}

/// Get a todo item by id
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "todoitems",
    params(
        ("id" = Uuid, Path, description = "Todo item id")
    ),
    responses(
        (status = 200, description = "Todo item found", body = TodoItem),
        (status = 404, description = "Todo item not found"),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorResponse)
    )
)]
async fn get_todo_item<R: TodoRepository>(
    State(service): State<Arc<TodoItemService<R>>>,
    Path(id): Path<Uuid>,
) -> TodoResult<Response> {
    match service.get_todo_item(id).await? {
        Some(item) => Ok(Json(item).into_response()),
        None => Ok(StatusCode::NOT_FOUND.into_response()),
    }
}

/// Create a new todo item
#[utoipa::path(
    post,
    path = "",
    tag = "todoitems",
    request_body = TodoItem,
    responses(
        (status = 201, description = "Todo item created", body = TodoItem),
        (status = 400, description = "Invalid todo item", body = axum_helpers::ErrorResponse),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorResponse)
    )
)]
async fn create_todo_item<R: TodoRepository>(
    State(service): State<Arc<TodoItemService<R>>>,
    Json(item): Json<TodoItem>,
) -> TodoResult<impl IntoResponse> {
    service.create_todo_item(item.clone()).await?;

    let location = format!("/api/todoitems/{}", item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(item),
    ))
}

/// Replace an existing todo item
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "todoitems",
    params(
        ("id" = Uuid, Path, description = "Todo item id")
    ),
    request_body = TodoItem,
    responses(
        (status = 204, description = "Todo item updated"),
        (status = 400, description = "Invalid todo item", body = axum_helpers::ErrorResponse),
        (status = 404, description = "Todo item not found", body = axum_helpers::ErrorResponse),
        (status = 500, description = "Internal server error", body = axum_helpers::ErrorResponse)
    )
)]
async fn update_todo_item<R: TodoRepository>(
    State(service): State<Arc<TodoItemService<R>>>,
    Path(id): Path<Uuid>,
    Json(item): Json<TodoItem>,
) -> TodoResult<StatusCode> {
    service.update_todo_item(id, item).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryTodoRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        let service = TodoItemService::new(InMemoryTodoRepository::new());
        Router::new().nest("/api/todoitems", router(service))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_empty_returns_200_with_empty_array() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/todoitems")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_create_returns_201_with_location_and_echoed_item() {
        let app = app();
        let id = Uuid::new_v4();
        let item = serde_json::json!({
            "id": id,
            "description": "Wash dishes",
            "is_completed": false
        });

        let response = app
            .oneshot(json_request("POST", "/api/todoitems", item.clone()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            &format!("/api/todoitems/{}", id)
        );
        assert_eq!(body_json(response).await, item);
    }

    #[tokio::test]
    async fn test_create_empty_description_returns_400_with_message() {
        let item = serde_json::json!({"id": Uuid::new_v4()});

        let response = app()
            .oneshot(json_request("POST", "/api/todoitems", item))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Description is required"})
        );
    }

    #[tokio::test]
    async fn test_create_duplicate_description_returns_400() {
        let app = app();
        let first = serde_json::json!({"id": Uuid::new_v4(), "description": "Mop Floors"});
        let second = serde_json::json!({"id": Uuid::new_v4(), "description": "mop floors"});

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/todoitems", first))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(json_request("POST", "/api/todoitems", second))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["message"],
            "Description already exists"
        );
    }

    #[tokio::test]
    async fn test_get_missing_item_returns_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(format!("/api/todoitems/{}", Uuid::new_v4()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_after_create_returns_item() {
        let app = app();
        let id = Uuid::new_v4();
        let item = serde_json::json!({"id": id, "description": "Clean sink", "is_completed": false});

        app.clone()
            .oneshot(json_request("POST", "/api/todoitems", item.clone()))
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/todoitems/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, item);
    }

    #[tokio::test]
    async fn test_update_returns_204() {
        let app = app();
        let id = Uuid::new_v4();

        app.clone()
            .oneshot(json_request(
                "POST",
                "/api/todoitems",
                serde_json::json!({"id": id, "description": "Break dishes"}),
            ))
            .await
            .unwrap();

        let response = app
            .oneshot(json_request(
                "PUT",
                &format!("/api/todoitems/{}", id),
                serde_json::json!({"id": id, "description": "Replace dishes", "is_completed": true}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_update_mismatched_id_returns_400() {
        let response = app()
            .oneshot(json_request(
                "PUT",
                &format!("/api/todoitems/{}", Uuid::new_v4()),
                serde_json::json!({"id": Uuid::new_v4(), "description": "Check battery"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Invalid Id value supplied"})
        );
    }

    #[tokio::test]
    async fn test_update_missing_item_returns_404_with_message() {
        let id = Uuid::new_v4();
        let response = app()
            .oneshot(json_request(
                "PUT",
                &format!("/api/todoitems/{}", id),
                serde_json::json!({"id": id, "description": "Hide dishes"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Guid not found"})
        );
    }
}
