use axum::Json;
use tracing::info;

use vis_portal_shared::account::handle::{AuthUserResult, Profile};

use super::{AuthContext, ResolvedRole, Role};

/// Resolve the caller's identity and role.
///
/// The stored user record is refreshed from the provider-injected headers,
/// mirroring what the identity provider asserts on login.
pub async fn auth_user(ctx: AuthContext) -> Json<AuthUserResult> {
    let user = super::INSTANCE.upsert(&ctx);

    let (role, profile) = match ctx.role {
        ResolvedRole::Admin(admin) => (Role::Admin, Some(Profile::Admin(admin))),
        ResolvedRole::Student(student) => (Role::Student, Some(Profile::Student(student))),
        ResolvedRole::Pending => (Role::Pending, None),
    };

    info!("identity {} resolved as {:?}", user.id, role);

    Json(AuthUserResult {
        user,
        role,
        profile,
    })
}
