use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::home::controller::HomeResponse;
use profrate_models::{
    AverageNotFoundResponse, ErrorResponse, LoginRequest, LoginResponse, MessageResponse,
    ModuleInstanceListing, NoRatingsResponse, ProfessorInfo, ProfessorModuleAverage, ProfessorRating,
    RateProfessorRequest, RegisterRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::home::controller::home,
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::logout_user,
        crate::modules::catalog::controller::list_module_instances,
        crate::modules::ratings::controller::get_professor_ratings,
        crate::modules::ratings::controller::get_professor_module_average,
        crate::modules::ratings::controller::rate_professor,
    ),
    components(
        schemas(
            HomeResponse,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            ModuleInstanceListing,
            ProfessorInfo,
            ProfessorRating,
            ProfessorModuleAverage,
            NoRatingsResponse,
            AverageNotFoundResponse,
            RateProfessorRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Home", description = "Service overview"),
        (name = "Authentication", description = "Registration, login and logout"),
        (name = "Catalog", description = "Module instances and their professors"),
        (name = "Ratings", description = "Professor ratings and averages"),
    ),
    info(
        title = "Professor Rating API",
        version = "0.1.0",
        description = "Rate professors per module instance and read their averages"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "token_auth",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}
