use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::server::conn::http1::Builder as ConnectionBuilder;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use segmatch::{Node, Params};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

type Handler = fn(&Params<'_, '_>) -> String;

// One tree per HTTP method. The tree itself knows nothing about methods.
type Router = HashMap<Method, Node<Handler>>;

// GET /
fn index(_: &Params<'_, '_>) -> String {
    "Hello, world!".to_owned()
}

// GET /users/:id
fn user(params: &Params<'_, '_>) -> String {
    format!("user {}", params.get("id").unwrap_or_default())
}

// GET /users/me
fn me(_: &Params<'_, '_>) -> String {
    "it's you".to_owned()
}

// POST /users
fn create_user(_: &Params<'_, '_>) -> String {
    "created".to_owned()
}

// GET /repos/:owner/:repo
fn repo(params: &Params<'_, '_>) -> String {
    let owner = params.get("owner").unwrap_or_default();
    let repo = params.get("repo").unwrap_or_default();
    format!("{}/{}", owner, repo)
}

// GET /repos/:owner/:repo/issues/:number
fn issue(params: &Params<'_, '_>) -> String {
    format!("{} #{}", repo(params), params.get("number").unwrap_or_default())
}

// Each route group is built on its own, then merged into one tree.
fn users() -> Node<Handler> {
    let mut tree = Node::new();
    tree.insert("/", index as Handler);
    tree.insert("/users/:id", user as Handler);
    tree.insert("/users/me", me as Handler);
    tree
}

fn repos() -> Node<Handler> {
    let mut tree = Node::new();
    tree.insert("/repos/:owner/:repo", repo as Handler);
    tree.insert("/repos/:owner/:repo/issues/:number", issue as Handler);
    tree
}

fn router() -> Router {
    let mut posts = Node::new();
    posts.insert("/users", create_user as Handler);

    let mut router = Router::new();
    router.insert(Method::GET, users().merge(repos()));
    router.insert(Method::POST, posts);
    router
}

async fn route(
    router: Arc<Router>,
    req: Request<Incoming>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    // find the tree for this request method
    let Some(tree) = router.get(req.method()) else {
        return Ok(status(StatusCode::METHOD_NOT_ALLOWED));
    };

    // find the handler for this request path
    let response = match tree.at(req.uri().path()) {
        Ok(found) => {
            let body = (found.value)(&found.params);
            Response::new(Full::new(Bytes::from(body)))
        }
        Err(err) => {
            tracing::debug!(path = req.uri().path(), %err, "no route");
            status(StatusCode::NOT_FOUND)
        }
    };

    Ok(response)
}

fn status(code: StatusCode) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::new()));
    *response.status_mut() = code;
    response
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // build once, then share for concurrent lookups
    let router = Arc::new(router());

    let listener = TcpListener::bind(("127.0.0.1", 3000)).await?;
    tracing::info!("listening on http://127.0.0.1:3000");

    loop {
        let router = router.clone();
        let (tcp, _) = listener.accept().await?;
        tokio::task::spawn(async move {
            if let Err(err) = ConnectionBuilder::new()
                .serve_connection(
                    TokioIo::new(tcp),
                    hyper::service::service_fn(|request| route(router.clone(), request)),
                )
                .await
            {
                tracing::warn!(?err, "error serving connection");
            }
        });
    }
}
