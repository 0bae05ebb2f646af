//! Session client — token lifecycle and chat exchange.
//!
//! Every operation is one request/response round trip with no retry. Failures
//! come back as `AuthError` values or soft `BotReply`s; nothing panics.
//!
//! The session sits behind a `RefCell` so an `Rc<SessionClient>` can be shared
//! between `spawn_local` tasks. No borrow is held across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use momo_types::{
    config::ClientConfig,
    message::{BotReply, ChatInteraction, ReplyKind},
    session::Session,
    AuthError, ClientError,
};
use crate::api::{self, LoginRequest, LoginResponse, MessageRequest, MessageResponse, RegisterRequest};
use crate::ports::{HttpPort, HttpRequest, HttpResponse, StoragePort};

pub struct SessionClient {
    config: ClientConfig,
    http: Rc<dyn HttpPort>,
    storage: Rc<dyn StoragePort>,
    session: RefCell<Option<Session>>,
}

impl SessionClient {
    /// Build an unauthenticated client. Call [`restore`](Self::restore) to
    /// pick up a token persisted by an earlier run.
    pub fn new(config: ClientConfig, http: Rc<dyn HttpPort>, storage: Rc<dyn StoragePort>) -> Self {
        Self {
            config,
            http,
            storage,
            session: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Snapshot of the current session.
    pub fn session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_some()
    }

    /// Adopt the token persisted under the configured key, if any.
    pub async fn restore(&self) -> Option<Session> {
        match self.storage.get(&self.config.token_key).await {
            Ok(Some(token)) if !token.trim().is_empty() => {
                let session = Session::new(token);
                *self.session.borrow_mut() = Some(session.clone());
                log::info!("Session restored from {} storage", self.storage.backend_name());
                Some(session)
            }
            Ok(_) => None,
            Err(e) => {
                log::warn!("Could not read persisted session: {}", e);
                None
            }
        }
    }

    /// Create an account. Success never logs the user in.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
        let (name, email, password) = (name.trim(), email.trim(), password.trim());
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let body = RegisterRequest { nombre: name, email, password };
        let req = HttpRequest::post_json(self.config.endpoint(api::REGISTER_PATH), &body)
            .map_err(transport_failed)?;
        let response = self.http.send(req).await.map_err(transport_failed)?;

        if !response.is_success() {
            return Err(self.rejected(&response));
        }
        log::info!("Registration accepted");
        Ok(())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let (email, password) = (email.trim(), password.trim());
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingFields);
        }

        let body = LoginRequest { email, password };
        let req = HttpRequest::post_json(self.config.endpoint(api::LOGIN_PATH), &body)
            .map_err(transport_failed)?;
        let response = self.http.send(req).await.map_err(transport_failed)?;

        if !response.is_success() {
            return Err(self.rejected(&response));
        }

        let data: LoginResponse = response.json().map_err(transport_failed)?;
        let token = match data.token {
            Some(t) if !t.trim().is_empty() => t,
            _ => {
                log::warn!("Login answered {} without a token", response.status);
                return Err(AuthError::ServerRejected(self.config.generic_auth_error.clone()));
            }
        };

        let session = Session {
            token,
            email: data.email.or_else(|| Some(email.to_string())),
            expires_at: data.expires_at,
        };
        *self.session.borrow_mut() = Some(session.clone());
        if let Err(e) = self.storage.set(&self.config.token_key, &session.token).await {
            log::warn!("Session token not persisted: {}", e);
        }
        log::info!("Logged in");
        Ok(session)
    }

    /// Drop the session from memory and storage. Safe to call repeatedly.
    pub async fn logout(&self) {
        let had_session = self.session.borrow_mut().take().is_some();
        if let Err(e) = self.storage.delete(&self.config.token_key).await {
            log::warn!("Could not remove persisted token: {}", e);
        }
        if had_session {
            log::info!("Logged out");
        }
    }

    /// Chat history, oldest interaction first.
    pub async fn fetch_history(&self) -> Result<Vec<ChatInteraction>, AuthError> {
        let session = self.session().ok_or(AuthError::Unauthenticated)?;

        let req = HttpRequest::get(self.config.endpoint(api::HISTORY_PATH)).with_bearer(&session);
        log::debug!("GET {}", req.url);
        let outcome = self.http.send(req).await;
        self.ensure_current(&session)?;
        let response = outcome.map_err(transport_failed)?;

        if response.is_auth_failure() {
            self.expire().await;
            return Err(AuthError::AuthExpired);
        }
        if !response.is_success() {
            return Err(self.rejected(&response));
        }

        // Backend order is newest first.
        let mut history: Vec<ChatInteraction> = response.json().map_err(transport_failed)?;
        history.reverse();
        Ok(history)
    }

    /// Send one message. `Ok(None)` means the text was blank and nothing
    /// happened; soft failures come back as a `BotReply` to render.
    /// `SessionChanged` means the user logged out or in again before the
    /// reply arrived, and there is nothing to render.
    pub async fn send_message(&self, text: &str) -> Result<Option<BotReply>, AuthError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let session = self.session().ok_or(AuthError::Unauthenticated)?;

        let req = match HttpRequest::post_json(
            self.config.endpoint(api::MESSAGE_PATH),
            &MessageRequest { message: text },
        ) {
            Ok(req) => req.with_bearer(&session),
            Err(e) => return Ok(Some(self.connection_reply(e))),
        };
        log::debug!("POST {}", req.url);

        let outcome = self.http.send(req).await;
        self.ensure_current(&session)?;
        let response = match outcome {
            Ok(r) => r,
            Err(e) => return Ok(Some(self.connection_reply(e))),
        };

        if response.is_auth_failure() {
            self.expire().await;
            return Err(AuthError::AuthExpired);
        }
        if !response.is_success() {
            log::warn!("Chat backend answered {}", response.status);
            return Ok(Some(BotReply::new(
                ReplyKind::ServerError,
                self.config.reply_fallback.clone(),
            )));
        }

        let reply = match response.json::<MessageResponse>() {
            Ok(MessageResponse { response: Some(text) }) if !text.trim().is_empty() => {
                BotReply::answer(text)
            }
            Ok(_) => BotReply::new(ReplyKind::Fallback, self.config.reply_fallback.clone()),
            Err(e) => return Ok(Some(self.connection_reply(e))),
        };
        Ok(Some(reply))
    }

    /// Fail with `SessionChanged` unless the session still carries the
    /// token `sent` was issued with. Called after every authenticated round
    /// trip, so a late response never acts on a newer login or a logout.
    fn ensure_current(&self, sent: &Session) -> Result<(), AuthError> {
        let current = self
            .session
            .borrow()
            .as_ref()
            .map_or(false, |s| s.token == sent.token);
        if current {
            Ok(())
        } else {
            log::debug!("Session changed while a request was in flight, dropping the response");
            Err(AuthError::SessionChanged)
        }
    }

    /// Clear the session after the backend refused the current token.
    async fn expire(&self) {
        log::warn!("Authorization expired, clearing session");
        self.logout().await;
    }

    fn rejected(&self, response: &HttpResponse) -> AuthError {
        log::warn!("Backend rejected request with status {}", response.status);
        let message = api::extract_message(&response.body)
            .unwrap_or_else(|| self.config.generic_auth_error.clone());
        AuthError::ServerRejected(message)
    }

    fn connection_reply(&self, e: ClientError) -> BotReply {
        log::warn!("Chat request failed: {}", e);
        BotReply::new(ReplyKind::ConnectionError, self.config.reply_connection_error.clone())
    }
}

fn transport_failed(e: ClientError) -> AuthError {
    log::warn!("Request failed: {}", e);
    AuthError::ConnectionError
}
