//! Landing page with the upload form.

use axum::{
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use tracing::info;

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> impl IntoResponse {
    info!("landing page accessed");
    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        INDEX_HTML,
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Envio de Planilhas</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
            max-width: 640px;
            margin: 0 auto;
            padding: 40px 20px;
            background: #16213e;
            min-height: 100vh;
            color: #e6e6e6;
        }
        h1 { color: #00d4ff; margin-bottom: 10px; }
        p { color: #a0a0a0; }
        form {
            background: #1e1e3f;
            border-radius: 8px;
            padding: 20px;
            margin: 30px 0;
        }
        input[type="file"] { color: #e6e6e6; margin-bottom: 15px; display: block; }
        button {
            background: #00d4ff;
            color: #16213e;
            border: none;
            border-radius: 4px;
            padding: 10px 24px;
            font-size: 1em;
            cursor: pointer;
        }
        code {
            background: #2a2a4a;
            padding: 2px 8px;
            border-radius: 4px;
            color: #00d4ff;
        }
    </style>
</head>
<body>
    <h1>Envio de Planilhas CSV</h1>
    <p>Envie um arquivo CSV com a coluna <code>valor</code>. O processamento
    em lote grava o resultado formatado em <code>processed/</code>.</p>
    <form action="/upload" method="post" enctype="multipart/form-data">
        <input type="file" name="file" accept=".csv">
        <button type="submit">Enviar</button>
    </form>
</body>
</html>"#;
