//! Blog post handlers.

use actix_web::{HttpResponse, web};

use quill_core::domain::{PostDraft, PostQuery, check_id_match, validate_draft};
use quill_shared::dto::{CreatePostRequest, ListPostsQuery, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/posts?page&pageSize&author
///
/// Body is the page of posts; pagination metadata travels in the
/// `X-Pagination-*` headers.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let raw = query.into_inner();
    let normalized = PostQuery::normalize(raw.page, raw.page_size, raw.author.as_deref());

    let page = state.posts.list(&normalized).await?;
    let total_pages = normalized.total_pages(page.total_count);

    let body: Vec<PostResponse> = page.items.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok()
        .insert_header(("X-Pagination-TotalCount", page.total_count.to_string()))
        .insert_header(("X-Pagination-PageSize", normalized.page_size.to_string()))
        .insert_header(("X-Pagination-CurrentPage", normalized.page.to_string()))
        .insert_header(("X-Pagination-TotalPages", total_pages.to_string()))
        .json(body))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    match state.posts.find_by_id(id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(PostResponse::from(post))),
        None => Err(AppError::NotFound(format!("Post {} not found", id))),
    }
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = PostDraft::new(req.title, req.author, req.content);
    validate_draft(&draft)?;

    let created = state.posts.create(draft).await?;
    tracing::info!(post_id = created.id, "Post created");

    Ok(HttpResponse::Created()
        .insert_header(("Location", format!("/api/posts/{}", created.id)))
        .json(PostResponse::from(created)))
}

/// PUT /api/posts/{id}
///
/// The body may carry the `version` captured at read time; when it does, a
/// concurrent modification since that read is answered with 409.
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    check_id_match(id, req.id)?;

    let draft = PostDraft::new(req.title, req.author, req.content);
    validate_draft(&draft)?;

    state.posts.update(id, draft, req.version).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state.posts.delete(id).await?;
    tracing::info!(post_id = id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};

    use quill_infra::InMemoryPostRepository;
    use quill_shared::dto::PostResponse;

    use crate::handlers::configure_routes;
    use crate::state::AppState;

    fn fresh_state() -> web::Data<AppState> {
        web::Data::new(AppState::with_store(Arc::new(InMemoryPostRepository::new())))
    }

    macro_rules! test_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(fresh_state())
                    .configure(configure_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn create_read_update_delete_lifecycle() {
        let app = test_app!();

        // Create
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({
                "title": "A", "author": "X", "content": "c"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let location = resp
            .headers()
            .get("Location")
            .unwrap()
            .to_str()
            .unwrap()
            .to_owned();
        let created: PostResponse = test::read_body_json(resp).await;
        assert_eq!(created.id, 1);
        assert_eq!(location, "/api/posts/1");
        assert_eq!(created.created_at, created.updated_at);

        // Update with matching id and fresh token
        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(serde_json::json!({
                "id": 1, "title": "B", "author": "X", "content": "c2",
                "version": created.version
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        // Read back: id and createdAt unchanged, updatedAt refreshed
        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let fetched: PostResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched.id, 1);
        assert_eq!(fetched.title, "B");
        assert_eq!(fetched.created_at, created.created_at);
        assert!(fetched.updated_at >= created.updated_at);
        assert_eq!(fetched.version, created.version + 1);

        // Delete, then the post is gone
        let req = test::TestRequest::delete().uri("/api/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/posts/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn blank_fields_are_rejected() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({
                "title": "  ", "author": "X", "content": ""
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn mismatched_body_id_is_rejected() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({
                "title": "A", "author": "X", "content": "c"
            }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/posts/1")
            .set_json(serde_json::json!({
                "id": 2, "title": "B", "author": "X", "content": "c"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn stale_version_token_returns_conflict() {
        let app = test_app!();

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(serde_json::json!({
                "title": "A", "author": "X", "content": "c"
            }))
            .to_request();
        let created: PostResponse = test::call_and_read_body_json(&app, req).await;

        // Two writers captured the same token; the second write must lose.
        for (title, expected) in [("B", StatusCode::NO_CONTENT), ("C", StatusCode::CONFLICT)] {
            let req = test::TestRequest::put()
                .uri("/api/posts/1")
                .set_json(serde_json::json!({
                    "title": title, "author": "X", "content": "c",
                    "version": created.version
                }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), expected);
        }
    }

    #[actix_web::test]
    async fn update_and_delete_of_missing_post_are_not_found() {
        let app = test_app!();

        let req = test::TestRequest::put()
            .uri("/api/posts/99")
            .set_json(serde_json::json!({
                "title": "B", "author": "X", "content": "c"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete().uri("/api/posts/99").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn list_filters_and_reports_pagination_headers() {
        let app = test_app!();

        for (title, author) in [("A", "John Doe"), ("B", "Jane Smith"), ("C", "John Doe")] {
            let req = test::TestRequest::post()
                .uri("/api/posts")
                .set_json(serde_json::json!({
                    "title": title, "author": author, "content": "c"
                }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get()
            .uri("/api/posts?page=1&pageSize=10&author=john")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("X-Pagination-TotalCount").unwrap(),
            "2"
        );
        assert_eq!(resp.headers().get("X-Pagination-TotalPages").unwrap(), "1");

        let posts: Vec<PostResponse> = test::read_body_json(resp).await;
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| p.author == "John Doe"));
        // Newest first
        assert!(posts[0].id > posts[1].id);
    }

    #[actix_web::test]
    async fn garbage_pagination_is_clamped_not_rejected() {
        let app = test_app!();

        let req = test::TestRequest::get()
            .uri("/api/posts?page=-3&pageSize=100000")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get("X-Pagination-CurrentPage").unwrap(), "1");
        assert_eq!(resp.headers().get("X-Pagination-PageSize").unwrap(), "100");
    }
}
