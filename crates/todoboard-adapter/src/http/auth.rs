/*
[INPUT]:  Login parameters
[OUTPUT]: Session identity and result-code envelopes
[POS]:    HTTP layer - session endpoints (me/login/logout)
[UPDATE]: When auth endpoints or flow changes
*/

use reqwest::Method;

use crate::http::{Result, TodoClient};
use crate::types::{ApiEnvelope, EmptyData, LoginData, LoginRequest, MeData};

impl TodoClient {
    /// Who is the current session?
    ///
    /// GET auth/me
    pub async fn me(&self) -> Result<ApiEnvelope<MeData>> {
        let builder = self.request(Method::GET, "auth/me")?;
        self.send_json(builder).await
    }

    /// POST auth/login
    pub async fn login(&self, params: &LoginRequest) -> Result<ApiEnvelope<LoginData>> {
        let builder = self.request(Method::POST, "auth/login")?.json(params);
        self.send_json(builder).await
    }

    /// DELETE auth/login
    pub async fn logout(&self) -> Result<ApiEnvelope<EmptyData>> {
        let builder = self.request(Method::DELETE, "auth/login")?;
        self.send_json(builder).await
    }
}
