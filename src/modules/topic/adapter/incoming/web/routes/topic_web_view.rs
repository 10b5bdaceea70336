use actix_web::{get, http::header::ContentType, web, HttpResponse, Responder};
use tracing::error;
use uuid::Uuid;

use crate::{
    topic::application::ports::{
        incoming::use_cases::GetTopicError, outgoing::TopicWithAuthor,
    },
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// Topic web view
///
/// Server-rendered page for embedding a topic in mobile clients.
#[utoipa::path(
    get,
    path = "/api/topics/{topic_id}/view",
    tag = "topics",
    params(("topic_id" = Uuid, Path, description = "Topic ID")),
    responses(
        (status = 200, description = "Rendered topic", content_type = "text/html", body = String),
        (status = 404, description = "Topic not found", content_type = "text/html", body = String),
        (status = 500, description = "Internal server error", content_type = "text/html", body = String)
    )
)]
#[get("/api/topics/{topic_id}/view")]
pub async fn topic_web_view_handler(
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let topic_id = path.into_inner();

    match data.topic.get.execute(topic_id).await {
        Ok(topic) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(render_topic(&topic)),
        Err(GetTopicError::NotFound) => HttpResponse::NotFound()
            .content_type(ContentType::html())
            .body(render_message("Topic not found", "The topic you are looking for does not exist.")),
        Err(GetTopicError::QueryFailed(msg)) => {
            error!(topic_id = %topic_id, error = %msg, "Failed to render topic view");
            HttpResponse::InternalServerError()
                .content_type(ContentType::html())
                .body(render_message("Something went wrong", "Please try again later."))
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Rendering
// ──────────────────────────────────────────────────────────
//

fn render_topic(value: &TopicWithAuthor) -> String {
    let topic = &value.topic;
    let author = value
        .author
        .as_ref()
        .map(|a| escape_html(&a.username))
        .unwrap_or_else(|| "deleted user".to_string());

    let paragraphs: String = topic
        .body
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(|p| format!("<p>{}</p>", escape_html(p).replace('\n', "<br>")))
        .collect();

    page(
        &escape_html(&topic.title),
        &format!(
            "<article>\n<h1>{title}</h1>\n<div class=\"meta\">{author} · {created} · {votes} votes · {replies} replies</div>\n<div class=\"body\">{paragraphs}</div>\n</article>",
            title = escape_html(&topic.title),
            author = author,
            created = topic.created_at.format("%Y-%m-%d %H:%M"),
            votes = topic.vote_count,
            replies = topic.reply_count,
            paragraphs = paragraphs,
        ),
    )
}

fn render_message(title: &str, message: &str) -> String {
    page(
        title,
        &format!(
            "<article>\n<h1>{}</h1>\n<p>{}</p>\n</article>",
            escape_html(title),
            escape_html(message)
        ),
    )
}

fn page(title: &str, content: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{}</title>\n<style>body{{font-family:sans-serif;margin:0 auto;max-width:720px;padding:16px;line-height:1.6}}.meta{{color:#888;font-size:.9em}}</style>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        title, content
    )
}

fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

//
// ──────────────────────────────────────────────────────────
// Tests
// ──────────────────────────────────────────────────────────
//
