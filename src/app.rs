use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::{authorize, AccessGuard, AccessPolicy};
use crate::state::AppState;

/// Full application router. Each access tier is its own router whose routes
/// share one `authorize` layer.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        // Public
        .merge(public_routes())
        // Any valid token
        .merge(guarded(protected_routes(), &state, AccessPolicy::Any))
        // Teacher role
        .merge(guarded(teacher_routes(), &state, AccessPolicy::TEACHER))
        // Admin flag
        .merge(guarded(admin_routes(), &state, AccessPolicy::Admin))
        .with_state(state);

    if config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }
    router
}

fn guarded(routes: Router<AppState>, state: &AppState, policy: AccessPolicy) -> Router<AppState> {
    routes.route_layer(from_fn_with_state(AccessGuard::new(state.clone(), policy), authorize))
}

fn public_routes() -> Router<AppState> {
    use handlers::public;

    Router::new()
        .route("/health", get(public::health))
        .route("/api/auth/login", post(public::login))
}

fn protected_routes() -> Router<AppState> {
    use handlers::protected;

    Router::new()
        .route("/api/auth/user", get(protected::user_get))
        .route("/api/subjects", get(protected::subjects_get))
        .route("/api/subjects/:id", get(protected::subject_get))
        .route("/api/grades/:id", get(protected::grades_get))
        .route("/api/classrooms/:id", get(protected::classroom_get))
}

fn teacher_routes() -> Router<AppState> {
    use handlers::teacher;

    Router::new()
        .route("/api/teacher/grades/:student_id/:subject_id", get(teacher::student_grades_get))
        .route("/api/subjects/classrooms/:id", get(teacher::classrooms_by_subject_get))
        .route("/api/students/:classroom_id/:subject_id", get(teacher::classroom_students_get))
        .route("/api/teacher/students/:id", get(teacher::student_get))
        .route("/api/grades", post(teacher::grade_post))
}

fn admin_routes() -> Router<AppState> {
    use handlers::admin;

    Router::new()
        // Users
        .route("/api/admin/users", post(admin::user_post))
        .route("/api/admin/users/:id", get(admin::user_get))
        .route("/api/admin/students", get(admin::students_get))
        .route("/api/admin/students/:id", get(admin::classroom_students_get).put(admin::student_put))
        .route("/api/admin/teachers", get(admin::teachers_get))
        .route("/api/admin/teachers/:id", put(admin::teacher_put))
        // Enrollments
        .route("/api/admin/students/subjects/add", post(admin::student_subject_add))
        .route("/api/admin/students/subjects/remove", post(admin::student_subject_remove))
        .route("/api/admin/students/:id/subjects", put(admin::student_subjects_put))
        .route("/api/admin/student/classrooms/change", post(admin::student_classroom_change))
        .route("/api/admin/teachers/subjects/add", post(admin::teacher_subject_add))
        .route("/api/admin/teachers/subjects/remove", post(admin::teacher_subject_remove))
        .route("/api/admin/teachers/data/:id", get(admin::teacher_data_get))
        .route("/api/admin/subjects/:id", get(admin::user_subjects_get))
        .route("/api/admin/classrooms/:id", get(admin::user_classrooms_get))
        // Catalog
        .route("/api/admin/classrooms", get(admin::classrooms_get).post(admin::classroom_post))
        .route("/api/admin/subjects", get(admin::subjects_get).post(admin::subject_post))
}
