/// Integration tests for the /posts endpoints
mod common;

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use blog_service::models::PostResponse;
    use blog_service::routes;
    use chrono::{DateTime, Utc};
    use serde_json::json;
    use serial_test::serial;
    use sqlx::PgPool;

    use crate::common::fixtures;

    // ============================================
    // Test Setup Helpers
    // ============================================

    async fn setup_test_app(
        pool: PgPool,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::new(pool))
                .app_data(routes::json_config())
                .app_data(routes::path_config())
                .app_data(routes::query_config())
                .configure(routes::configure_routes),
        )
        .await
    }

    // ============================================
    // Test 1: Create Post (Happy Path)
    // ============================================

    #[actix_web::test]
    #[serial]
    async fn test_create_post() {
        let pool = fixtures::create_test_pool().await;
        fixtures::reset_test_data(&pool).await;

        let user = fixtures::create_test_user(&pool, "writer", "writer@example.com").await;

        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::post()
            .uri("/posts/")
            .set_json(json!({
                "title": "My First Post",
                "content": "Hello, world!",
                "user_id": user.id
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let post: PostResponse = test::read_body_json(resp).await;
        assert!(post.id > 0);
        assert_eq!(post.title, "My First Post");
        assert_eq!(post.content, "Hello, world!");
        assert_eq!(post.author.id, user.id);
        assert_eq!(post.author.username, "writer");
        assert!(post.comments.is_empty());
    }

    // ============================================
    // Test 2: Create Post for Unknown Author
    // ============================================

    #[actix_web::test]
    #[serial]
    async fn test_create_post_unknown_author() {
        let pool = fixtures::create_test_pool().await;
        fixtures::reset_test_data(&pool).await;

        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::post()
            .uri("/posts/")
            .set_json(json!({
                "title": "Orphan",
                "content": "No author",
                "user_id": 99999
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "User with id 99999 not found. Cannot create post.");

        assert_eq!(fixtures::count_rows(&pool, "posts").await, 0);
    }

    // ============================================
    // Test 3: Empty Listing
    // ============================================

    #[actix_web::test]
    #[serial]
    async fn test_list_posts_empty() {
        let pool = fixtures::create_test_pool().await;
        fixtures::reset_test_data(&pool).await;

        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::get().uri("/posts/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let posts: Vec<PostResponse> = test::read_body_json(resp).await;
        assert!(posts.is_empty());
    }

    // ============================================
    // Test 4: Listing is Newest-First
    // ============================================

    #[actix_web::test]
    #[serial]
    async fn test_list_posts_newest_first() {
        let pool = fixtures::create_test_pool().await;
        fixtures::reset_test_data(&pool).await;

        let user = fixtures::create_test_user(&pool, "writer", "writer@example.com").await;
        fixtures::create_test_post(&pool, user.id, "oldest", "a").await;
        fixtures::create_test_post(&pool, user.id, "middle", "b").await;
        let newest = fixtures::create_test_post(&pool, user.id, "newest", "c").await;

        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::get().uri("/posts/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let posts: Vec<PostResponse> = test::read_body_json(resp).await;
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[0].id, newest.id);
        assert_eq!(posts[0].title, "newest");

        // created_at is non-increasing down the page.
        let times: Vec<DateTime<Utc>> = posts.iter().map(|p| p.created_at).collect();
        assert!(times.windows(2).all(|w| w[0] >= w[1]));
    }

    // ============================================
    // Test 5: Pagination Defaults and Skip
    // ============================================

    #[actix_web::test]
    #[serial]
    async fn test_list_posts_pagination() {
        let pool = fixtures::create_test_pool().await;
        fixtures::reset_test_data(&pool).await;

        let user = fixtures::create_test_user(&pool, "prolific", "p@example.com").await;
        for i in 0..15 {
            fixtures::create_test_post(&pool, user.id, &format!("post {}", i), "body").await;
        }

        let app = setup_test_app(pool.clone()).await;

        // Default page size is 10.
        let req = test::TestRequest::get().uri("/posts/").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let page: Vec<PostResponse> = test::read_body_json(resp).await;
        assert_eq!(page.len(), 10);

        // The remainder comes back when skipping the first page.
        let req = test::TestRequest::get()
            .uri("/posts/?skip=10&limit=10")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let rest: Vec<PostResponse> = test::read_body_json(resp).await;
        assert_eq!(rest.len(), 5);

        // Pages do not overlap.
        assert!(page.iter().all(|p| rest.iter().all(|r| r.id != p.id)));

        // A small explicit limit is honored.
        let req = test::TestRequest::get()
            .uri("/posts/?limit=3")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let small: Vec<PostResponse> = test::read_body_json(resp).await;
        assert_eq!(small.len(), 3);
    }

    // ============================================
    // Test 6: Malformed and Negative Paging Parameters
    // ============================================

    #[actix_web::test]
    #[serial]
    async fn test_list_posts_non_numeric_limit() {
        let pool = fixtures::create_test_pool().await;
        fixtures::reset_test_data(&pool).await;

        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::get()
            .uri("/posts/?limit=abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 422);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["detail"].is_string());
    }

    #[actix_web::test]
    #[serial]
    async fn test_list_posts_negative_paging_is_clamped() {
        let pool = fixtures::create_test_pool().await;
        fixtures::reset_test_data(&pool).await;

        let user = fixtures::create_test_user(&pool, "writer", "writer@example.com").await;
        fixtures::create_test_post(&pool, user.id, "Only one", "body").await;

        let app = setup_test_app(pool.clone()).await;

        // Negative skip behaves like zero.
        let req = test::TestRequest::get()
            .uri("/posts/?skip=-5&limit=10")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let posts: Vec<PostResponse> = test::read_body_json(resp).await;
        assert_eq!(posts.len(), 1);

        // Negative limit behaves like zero.
        let req = test::TestRequest::get()
            .uri("/posts/?limit=-1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let posts: Vec<PostResponse> = test::read_body_json(resp).await;
        assert!(posts.is_empty());
    }

    // ============================================
    // Test 7: Post Detail Includes Comments
    // ============================================

    #[actix_web::test]
    #[serial]
    async fn test_get_post_with_comments() {
        let pool = fixtures::create_test_pool().await;
        fixtures::reset_test_data(&pool).await;

        let author = fixtures::create_test_user(&pool, "author", "author@example.com").await;
        let fan = fixtures::create_test_user(&pool, "fan", "fan@example.com").await;
        let post = fixtures::create_test_post(&pool, author.id, "Discussed", "Text").await;
        fixtures::create_test_comment(&pool, post.id, fan.id, "great read").await;
        fixtures::create_test_comment(&pool, post.id, author.id, "glad you liked it").await;

        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::get()
            .uri(&format!("/posts/{}", post.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let detail: PostResponse = test::read_body_json(resp).await;
        assert_eq!(detail.id, post.id);
        assert_eq!(detail.author.username, "author");
        assert_eq!(detail.comments.len(), 2);
        assert_eq!(detail.comments[0].text, "great read");
        assert_eq!(detail.comments[0].author.username, "fan");
        assert_eq!(detail.comments[1].author.username, "author");
    }

    // ============================================
    // Test 8: Nonexistent Post
    // ============================================

    #[actix_web::test]
    #[serial]
    async fn test_get_nonexistent_post() {
        let pool = fixtures::create_test_pool().await;
        fixtures::reset_test_data(&pool).await;

        let app = setup_test_app(pool.clone()).await;

        let req = test::TestRequest::get().uri("/posts/99999").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Post with id 99999 not found");
    }
}
