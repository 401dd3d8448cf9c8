//! Interactive API documentation.

use axum::{Json, response::Html};
use utoipa::OpenApi;

use crate::api::openapi::ApiDoc;

const SWAGGER_UI: &str = r##"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Tailor API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/api/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// `GET /api` - Swagger UI bound to the generated document.
pub async fn swagger_ui_handler() -> Html<&'static str> {
    Html(SWAGGER_UI)
}

/// `GET /api/openapi.json` - the generated OpenAPI document.
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
