use reqwest::{Method, RequestBuilder, Response, header};
use serde::Serialize;

pub struct ApiClient {
    pub url: String,
    pub client: reqwest::Client,
}

impl ApiClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    /// A client that keeps the cookies the server sets, like a browser.
    pub fn with_cookies(url: String) -> Self {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .expect("Failed to build http client");
        Self { url, client }
    }

    fn path(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.url)
    }

    fn request(&self, method: Method, endpoint: &str, authorization: Option<&str>) -> RequestBuilder {
        let request = self.client.request(method, self.path(endpoint));
        match authorization {
            Some(value) => request.header(header::AUTHORIZATION, value),
            None => request,
        }
    }

    async fn send(request: RequestBuilder) -> Response {
        request.send().await.expect("Failed to send http request")
    }

    pub async fn get(&self, endpoint: &str, authorization: Option<&str>) -> Response {
        Self::send(self.request(Method::GET, endpoint, authorization)).await
    }

    pub async fn post<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
        authorization: Option<&str>,
    ) -> Response {
        Self::send(self.request(Method::POST, endpoint, authorization).json(body)).await
    }

    pub async fn post_no_body(&self, endpoint: &str) -> Response {
        Self::send(self.request(Method::POST, endpoint, None)).await
    }

    pub async fn put<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
        authorization: Option<&str>,
    ) -> Response {
        Self::send(self.request(Method::PUT, endpoint, authorization).json(body)).await
    }

    pub async fn delete(&self, endpoint: &str, authorization: Option<&str>) -> Response {
        Self::send(self.request(Method::DELETE, endpoint, authorization)).await
    }
}
