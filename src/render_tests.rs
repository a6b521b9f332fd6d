    use super::*;
    use httpmock::MockServer;

    fn renderer(server: &MockServer) -> GithubRenderer {
        GithubRenderer::new(server.url("/markdown"), Duration::from_secs(5)).expect("client")
    }

    #[test]
    fn test_render_posts_text_and_returns_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/markdown")
                .header("content-type", "application/json")
                .json_body(serde_json::json!({ "text": "hello" }));
            then.status(200)
                .header("content-type", "text/html;charset=utf-8")
                .body("<p>hello</p>");
        });

        let html = renderer(&server).render("hello").expect("render");
        assert_eq!(html, "<p>hello</p>");
        mock.assert();
    }

    #[test]
    fn test_render_sends_markdown_verbatim() {
        let markdown = "# Title\n\n* item \"quoted\"\n\ttabbed\n";
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/markdown")
                .json_body(serde_json::json!({ "text": markdown }));
            then.status(200).body("<h1>Title</h1>");
        });

        renderer(&server).render(markdown).expect("render");
        mock.assert();
    }

    #[test]
    fn test_render_sends_user_agent() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/markdown")
                .header("user-agent", GithubRenderer::user_agent());
            then.status(200).body("");
        });

        renderer(&server).render("").expect("render");
        mock.assert();
    }

    #[test]
    fn test_render_error_status_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST").path("/markdown");
            then.status(403).body("API rate limit exceeded");
        });

        let err = renderer(&server).render("hello").expect_err("403 should fail");
        match err {
            ConvertError::RenderStatus { status, body } => {
                assert_eq!(status.as_u16(), 403);
                assert_eq!(body, "API rate limit exceeded");
            }
            other => panic!("expected RenderStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_render_unreachable_endpoint_is_request_error() {
        // Reserve a free port, then release it so nothing is listening there.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let renderer = GithubRenderer::new(format!("http://{addr}/markdown"), Duration::from_secs(2))
            .expect("client");
        let err = renderer.render("hello").expect_err("connection should fail");
        assert!(matches!(err, ConvertError::RenderRequest(_)));
    }

    #[test]
    fn test_render_timeout_is_request_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("POST").path("/markdown");
            then.status(200)
                .delay(Duration::from_secs(3))
                .body("<p>late</p>");
        });

        let renderer =
            GithubRenderer::new(server.url("/markdown"), Duration::from_secs(1)).expect("client");
        let started_at = Instant::now();
        let err = renderer.render("hello").expect_err("slow service should time out");

        match err {
            ConvertError::RenderRequest(source) => assert!(source.is_timeout(), "{source}"),
            other => panic!("expected RenderRequest, got {other:?}"),
        }
        assert!(started_at.elapsed() < Duration::from_secs(3));
    }
