use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "token";
const USER_ROLE_KEY: &str = "role";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get the bearer token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Get the user role from localStorage
pub fn get_user_role() -> Option<String> {
    get_local_storage()?.get_item(USER_ROLE_KEY).ok()?
}
