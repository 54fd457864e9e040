use crate::error::Result;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

/// Renders the record with the given id as a downloadable PDF report.
///
/// All-or-nothing: the whole document is built in memory before the first
/// byte is written, so the caller receives either a complete report or an
/// error response, never a truncated document.
pub async fn record_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    tracing::info!("report requested for record {}", id);

    let record = state.fetcher.fetch_record(id, &state.credentials).await?;

    let pdf_bytes = markbook_pdf::render(&record, chrono::Utc::now())?;

    tracing::info!("report for record {} rendered ({} bytes)", id, pdf_bytes.len());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"student_report_{}.pdf\"", id),
            ),
        ],
        pdf_bytes,
    ))
}
