// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use anglo_rota_api::{
    ApiError, AuthenticationService, CreateDepartmentRequest, CreateJobTitleRequest,
    CreateShiftRequest, DepartmentResponse, EmployeeRequest, EmployeeResponse, JobTitleResponse,
    PasswordPolicy, RotaRequest, RotaResponse, ShiftResponse, TokenRequest, TokenResponse,
    UpdateDepartmentRequest, UpdateJobTitleRequest, UpdateShiftRequest, create_department,
    create_employee, create_job_title, create_rota, create_shift, delete_department,
    delete_employee, delete_job_title, delete_shift, get_employee, get_rota, list_departments,
    list_employees, list_job_titles, list_rota, list_shifts, patch_rota, update_department,
    update_employee, update_job_title, update_shift,
};
use anglo_rota_api::TokenConfig;
use anglo_rota_persistence::Store;

mod session;

use session::SessionUser;

/// AngloRota Server - HTTP server for the workforce rota system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Create this API user at startup if it does not exist.
    #[arg(long, requires = "bootstrap_password")]
    bootstrap_user: Option<String>,

    /// Password for the bootstrap user.
    #[arg(long, requires = "bootstrap_user")]
    bootstrap_password: Option<String>,
}

/// Application state shared across handlers.
///
/// The store is the sole shared mutable resource; it is wrapped in a
/// mutex and held across a request's store round-trips.
#[derive(Clone)]
struct AppState {
    /// The entity store.
    store: Arc<Mutex<Store>>,
    /// The token issuance service.
    auth: Arc<AuthenticationService>,
}

/// Query parameters for the rota natural-key lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RotaQuery {
    /// The employee id.
    employee_id: i64,
    /// The date (`YYYY-MM-DD`).
    date: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Unexpected { .. } => {
                error!(error = %err, "Unexpected error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::DuplicateName { .. }
            | ApiError::DuplicateId { .. }
            | ApiError::HasDependents { .. }
            | ApiError::InUse { .. }
            | ApiError::Inconsistent { .. }
            | ApiError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for POST `/api/auth/token`.
///
/// Issues a bearer token for valid credentials. Any failure is a 400,
/// matching the debug-oriented policy of the token endpoint.
async fn handle_create_token(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, HttpError> {
    info!(user_name = %req.user_name, "Handling token request");

    let mut store = app_state.store.lock().await;
    let response: TokenResponse = app_state
        .auth
        .issue_token(&mut store, &req.user_name, &req.password)
        .map_err(|e| HttpError {
            status: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        })?;
    drop(store);

    info!(user_name = %req.user_name, "Token issued");
    Ok(Json(response))
}

/// Handler for POST `/api/auth/logout`.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(user, token): SessionUser,
) -> Result<(), HttpError> {
    info!(user_name = %user.user_name, "Handling logout request");

    let mut store = app_state.store.lock().await;
    AuthenticationService::logout(&mut store, &token).map_err(|e| HttpError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: e.to_string(),
    })?;
    drop(store);

    Ok(())
}

/// Handler for GET `/api/department`.
async fn handle_list_departments(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
) -> Result<Json<Vec<DepartmentResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let departments: Vec<DepartmentResponse> = list_departments(&mut store)?;
    drop(store);

    Ok(Json(departments))
}

/// Handler for POST `/api/department`.
async fn handle_create_department(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<(), HttpError> {
    info!(name = %req.department_name, "Handling create_department request");

    let mut store = app_state.store.lock().await;
    create_department(&mut store, &req)?;
    drop(store);

    Ok(())
}

/// Handler for PATCH `/api/department`.
async fn handle_update_department(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Json(req): Json<UpdateDepartmentRequest>,
) -> Result<(), HttpError> {
    info!(
        department_id = req.department_id,
        name = %req.department_name,
        "Handling update_department request"
    );

    let mut store = app_state.store.lock().await;
    update_department(&mut store, &req)?;
    drop(store);

    Ok(())
}

/// Handler for DELETE `/api/department/{id}`.
async fn handle_delete_department(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Path(id): Path<i64>,
) -> Result<(), HttpError> {
    info!(department_id = id, "Handling delete_department request");

    let mut store = app_state.store.lock().await;
    delete_department(&mut store, id)?;
    drop(store);

    Ok(())
}

/// Handler for GET `/api/jobtitle`.
async fn handle_list_job_titles(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
) -> Result<Json<Vec<JobTitleResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let job_titles: Vec<JobTitleResponse> = list_job_titles(&mut store)?;
    drop(store);

    Ok(Json(job_titles))
}

/// Handler for POST `/api/jobtitle`.
async fn handle_create_job_title(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Json(req): Json<CreateJobTitleRequest>,
) -> Result<(), HttpError> {
    info!(
        name = %req.job_title_name,
        department = %req.in_department,
        "Handling create_job_title request"
    );

    let mut store = app_state.store.lock().await;
    create_job_title(&mut store, &req)?;
    drop(store);

    Ok(())
}

/// Handler for PATCH `/api/jobtitle`.
async fn handle_update_job_title(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Json(req): Json<UpdateJobTitleRequest>,
) -> Result<(), HttpError> {
    info!(job_title_id = req.id, "Handling update_job_title request");

    let mut store = app_state.store.lock().await;
    update_job_title(&mut store, &req)?;
    drop(store);

    Ok(())
}

/// Handler for DELETE `/api/jobtitle/{id}`.
async fn handle_delete_job_title(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Path(id): Path<i64>,
) -> Result<(), HttpError> {
    info!(job_title_id = id, "Handling delete_job_title request");

    let mut store = app_state.store.lock().await;
    delete_job_title(&mut store, id)?;
    drop(store);

    Ok(())
}

/// Handler for GET `/api/employees`.
async fn handle_list_employees(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
) -> Result<Json<Vec<EmployeeResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let employees: Vec<EmployeeResponse> = list_employees(&mut store)?;
    drop(store);

    Ok(Json(employees))
}

/// Handler for GET `/api/employees/{id}`.
async fn handle_get_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let employee: EmployeeResponse = get_employee(&mut store, id)?;
    drop(store);

    Ok(Json(employee))
}

/// Handler for POST `/api/employees`.
async fn handle_create_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Json(req): Json<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, HttpError> {
    info!(
        employee_id = req.employee_id,
        name = %req.name,
        "Handling create_employee request"
    );

    let mut store = app_state.store.lock().await;
    let created: EmployeeResponse = create_employee(&mut store, &req)?;
    drop(store);

    Ok(Json(created))
}

/// Handler for PATCH `/api/employees`.
async fn handle_update_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Json(req): Json<EmployeeRequest>,
) -> Result<(), HttpError> {
    info!(employee_id = req.employee_id, "Handling update_employee request");

    let mut store = app_state.store.lock().await;
    update_employee(&mut store, &req)?;
    drop(store);

    Ok(())
}

/// Handler for DELETE `/api/employees/{id}`.
async fn handle_delete_employee(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Path(id): Path<i64>,
) -> Result<(), HttpError> {
    info!(employee_id = id, "Handling delete_employee request");

    let mut store = app_state.store.lock().await;
    delete_employee(&mut store, id)?;
    drop(store);

    Ok(())
}

/// Handler for GET `/api/shift`.
async fn handle_list_shifts(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
) -> Result<Json<Vec<ShiftResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let shifts: Vec<ShiftResponse> = list_shifts(&mut store)?;
    drop(store);

    Ok(Json(shifts))
}

/// Handler for POST `/api/shift`.
async fn handle_create_shift(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Json(req): Json<CreateShiftRequest>,
) -> Result<(), HttpError> {
    info!(name = %req.shift_name, "Handling create_shift request");

    let mut store = app_state.store.lock().await;
    create_shift(&mut store, &req)?;
    drop(store);

    Ok(())
}

/// Handler for PATCH `/api/shift`.
async fn handle_update_shift(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Json(req): Json<UpdateShiftRequest>,
) -> Result<(), HttpError> {
    info!(shift_id = req.shift_id, "Handling update_shift request");

    let mut store = app_state.store.lock().await;
    update_shift(&mut store, &req)?;
    drop(store);

    Ok(())
}

/// Handler for DELETE `/api/shift/{id}`.
async fn handle_delete_shift(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Path(id): Path<i64>,
) -> Result<(), HttpError> {
    info!(shift_id = id, "Handling delete_shift request");

    let mut store = app_state.store.lock().await;
    delete_shift(&mut store, id)?;
    drop(store);

    Ok(())
}

/// Handler for GET `/api/rota/all`.
async fn handle_list_rota(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
) -> Result<Json<Vec<RotaResponse>>, HttpError> {
    let mut store = app_state.store.lock().await;
    let entries: Vec<RotaResponse> = list_rota(&mut store)?;
    drop(store);

    Ok(Json(entries))
}

/// Handler for GET `/api/rota?employeeId=&date=`.
async fn handle_get_rota(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Query(query): Query<RotaQuery>,
) -> Result<Json<RotaResponse>, HttpError> {
    let mut store = app_state.store.lock().await;
    let entry: RotaResponse = get_rota(&mut store, query.employee_id, &query.date)?;
    drop(store);

    Ok(Json(entry))
}

/// Handler for POST `/api/rota`.
async fn handle_create_rota(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Json(req): Json<RotaRequest>,
) -> Result<(), HttpError> {
    info!(
        employee_id = req.employee_id,
        date = %req.date,
        "Handling create_rota request"
    );

    let mut store = app_state.store.lock().await;
    create_rota(&mut store, &req)?;
    drop(store);

    Ok(())
}

/// Handler for PATCH `/api/rota`.
async fn handle_patch_rota(
    AxumState(app_state): AxumState<AppState>,
    SessionUser(..): SessionUser,
    Json(req): Json<RotaRequest>,
) -> Result<(), HttpError> {
    info!(
        employee_id = req.employee_id,
        date = %req.date,
        "Handling patch_rota request"
    );

    let mut store = app_state.store.lock().await;
    patch_rota(&mut store, &req)?;
    drop(store);

    Ok(())
}

/// Builds the application router.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/auth/token", post(handle_create_token))
        .route("/api/auth/logout", post(handle_logout))
        .route(
            "/api/department",
            get(handle_list_departments)
                .post(handle_create_department)
                .patch(handle_update_department),
        )
        .route("/api/department/{id}", delete(handle_delete_department))
        .route(
            "/api/jobtitle",
            get(handle_list_job_titles)
                .post(handle_create_job_title)
                .patch(handle_update_job_title),
        )
        .route("/api/jobtitle/{id}", delete(handle_delete_job_title))
        .route(
            "/api/employees",
            get(handle_list_employees)
                .post(handle_create_employee)
                .patch(handle_update_employee),
        )
        .route(
            "/api/employees/{id}",
            get(handle_get_employee).delete(handle_delete_employee),
        )
        .route(
            "/api/shift",
            get(handle_list_shifts)
                .post(handle_create_shift)
                .patch(handle_update_shift),
        )
        .route("/api/shift/{id}", delete(handle_delete_shift))
        .route("/api/rota/all", get(handle_list_rota))
        .route(
            "/api/rota",
            get(handle_get_rota)
                .post(handle_create_rota)
                .patch(handle_patch_rota),
        )
        .with_state(app_state)
}

/// Creates the bootstrap user if configured and not already present.
fn bootstrap_user(store: &mut Store, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let (Some(user_name), Some(password)) = (&args.bootstrap_user, &args.bootstrap_password)
    else {
        return Ok(());
    };

    if store.user_by_name(user_name)?.is_some() {
        info!(user_name = %user_name, "Bootstrap user already exists");
        return Ok(());
    }

    PasswordPolicy::default().validate(password, user_name)?;
    store.create_user(user_name, password)?;
    info!(user_name = %user_name, "Bootstrap user created");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing AngloRota Server");

    // Initialize the store (in-memory or file-based based on CLI argument)
    let mut store: Store = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Store::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Store::new_in_memory()?
    };

    bootstrap_user(&mut store, &args)?;

    // Expired sessions accumulate across restarts; sweep once at startup.
    store.delete_expired_sessions()?;

    let app_state: AppState = AppState {
        store: Arc::new(Mutex::new(store)),
        auth: Arc::new(AuthenticationService::new(TokenConfig::default())),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
