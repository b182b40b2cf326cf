//! Auth0 API에 등록된 권한 이름
//!
//! 바리스타는 상세 조회만, 매니저는 모든 권한을 가집니다.

pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
pub const POST_DRINKS: &str = "post:drinks";
pub const PATCH_DRINKS: &str = "patch:drinks";
pub const DELETE_DRINKS: &str = "delete:drinks";
