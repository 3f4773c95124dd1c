use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::TokenResponse;
use crate::modules::classes::model::{
    Class, ClassUpdateResponse, CreateClassDto, FeedbackDto, StatusQuery,
};
use crate::modules::payments::model::{
    CreatePaymentDto, CreatePaymentIntentDto, CreatePaymentIntentResponse, Payment, PaymentRecord,
};
use crate::modules::selections::model::{
    CreateSelectionDto, SelectedClass, SelectionDeleteResponse,
};
use crate::modules::users::model::{
    AdminFlag, CreateUserDto, InstructorFlag, RoleUpdateResponse, SetRoleDto, StudentFlag, User,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::create_token,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_admin_flag,
        crate::modules::users::controller::get_instructor_flag,
        crate::modules::users::controller::get_student_flag,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_instructors,
        crate::modules::users::controller::set_user_role,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::get_classes_by_instructor,
        crate::modules::classes::controller::get_class_by_id,
        crate::modules::classes::controller::get_approved_classes,
        crate::modules::classes::controller::set_class_status,
        crate::modules::classes::controller::send_feedback,
        crate::modules::selections::controller::create_selection,
        crate::modules::selections::controller::get_selections,
        crate::modules::selections::controller::delete_selection,
        crate::modules::payments::controller::create_payment,
        crate::modules::payments::controller::create_payment_intent,
        crate::modules::payments::controller::get_payments,
    ),
    components(
        schemas(
            TokenResponse,
            ErrorResponse,
            User,
            CreateUserDto,
            SetRoleDto,
            AdminFlag,
            InstructorFlag,
            StudentFlag,
            RoleUpdateResponse,
            Class,
            CreateClassDto,
            StatusQuery,
            FeedbackDto,
            ClassUpdateResponse,
            SelectedClass,
            CreateSelectionDto,
            SelectionDeleteResponse,
            Payment,
            CreatePaymentDto,
            PaymentRecord,
            CreatePaymentIntentDto,
            CreatePaymentIntentResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Session token issuance"),
        (name = "Users", description = "User directory and role management"),
        (name = "Classes", description = "Class catalog and approval workflow"),
        (name = "Selections", description = "Student enrollment intent"),
        (name = "Payments", description = "Payment recording and processor intents")
    ),
    info(
        title = "SnapSchool API",
        version = "0.1.0",
        description = "REST backend for the SnapSchool class-enrollment application.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
