use serde::Serialize;

///
/// Claims of the assertion exchanged for OAuth2 access token
///
#[derive(Serialize)]
pub struct JwtClaims<'a> {
    pub iss: &'a str,
    pub scope: &'a str,
    pub aud: &'a str,
    pub iat: i64,
    pub exp: i64,
}
