use crate::errors::AnalysisError;
use crate::models::{AppState, ParamsRunQa, QaResponse, QaStatus};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use log::{error, info};
use std::sync::Arc;

fn error_response(status: StatusCode, message: String) -> (StatusCode, Json<QaResponse>) {
    (
        status,
        Json(QaResponse {
            status: QaStatus::Error,
            message,
            timestamp: Utc::now().to_rfc3339(),
            report: None,
        }),
    )
}

pub async fn run_qa_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ParamsRunQa>,
) -> (StatusCode, Json<QaResponse>) {
    info!("Started QA handler for url: {}", params.url);

    let report = match state.agent.analyze(&params.url, &params.overrides()).await {
        Ok(report) => report,
        Err(e) => {
            error!("QA analysis failed for {}: {:?}", params.url, e);
            let status = match e {
                AnalysisError::Acquisition { .. } => StatusCode::BAD_GATEWAY,
                AnalysisError::Recommendation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            };
            return error_response(status, e.to_string());
        }
    };

    if let Some(report_dir) = &state.agent.config().report_dir {
        let artifacts = state.agent.render_reports(&report, report_dir).await;
        info!("Wrote {} report artifacts to {}", artifacts.len(), report_dir.display());
    }

    (
        StatusCode::OK,
        Json(QaResponse {
            status: QaStatus::Completed,
            message: format!(
                "QA analysis completed with {} issues",
                report.summary().total_issues
            ),
            timestamp: Utc::now().to_rfc3339(),
            report: Some(report),
        }),
    )
}
