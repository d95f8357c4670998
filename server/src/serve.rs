//! The Gopher accept loop and per-request glue.

use std::sync::Arc;

use colored::Colorize;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use govpher::render::{bad_content_page, bad_request_page};
use govpher::{selector, BoxError, Error, MenuRenderer, ParserRegistry, RenderOptions};

use crate::api::GovukClient;
use crate::ServeArgs;

/// Longest selector line a client may send.
const MAX_REQUEST_BYTES: usize = 4096;

/// Everything one connection needs, shared across the accept loop.
struct Service {
    client: GovukClient,
    registry: ParserRegistry,
    width: usize,
}

impl Service {
    /// Map one request line to one complete response. Menus carry the
    /// network identity the client connected to, so links stay navigable
    /// when the server is bound to a wildcard address.
    fn fetch_and_render(&self, request: &str, options: RenderOptions) -> String {
        let path = match selector::resolve(request) {
            Some(path) => path,
            None => return bad_request_page(request),
        };

        let raw = match self.client.fetch_content(path) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("fetching {path}: {e}");
                return bad_content_page(path, "Something went wrong.");
            }
        };

        let rendered = self
            .registry
            .parse(&raw, &self.client)
            .and_then(|document| MenuRenderer::new(options).render(&document));

        match rendered {
            Ok(menu) => menu,
            Err(Error::UnknownDocumentType(kind)) => bad_content_page(
                path,
                &format!("This page is of type \"{kind}\", which is not supported."),
            ),
            Err(e @ (Error::NoDocumentType | Error::MalformedContentItem(_))) => {
                log::error!("parsing {path}: {e}");
                bad_content_page(
                    path,
                    "Something went wrong parsing the response from GOV.UK.",
                )
            }
            Err(e) => {
                log::error!("rendering {path}: {e}");
                bad_content_page(path, "Something went wrong.")
            }
        }
    }
}

/// Serve Gopher requests until interrupted.
pub fn run(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let service = Arc::new(Service {
        client: GovukClient::new(&args.rendering.content_api, &args.rendering.search_api)?,
        registry: ParserRegistry::with_defaults(),
        width: args.rendering.width,
    });

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let listener = TcpListener::bind((args.host.as_str(), args.port)).await?;

        println!("{}", "Gopher server running".green().bold());
        println!(
            "  {} gopher://{}:{}/",
            "listening at".dimmed(),
            args.host,
            args.port
        );

        loop {
            let (stream, peer) = listener.accept().await?;
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                if let Err(e) = handle_connection(stream, service).await {
                    log::warn!("{peer}: {e}");
                }
            });
        }
    })
}

async fn handle_connection(mut stream: TcpStream, service: Arc<Service>) -> Result<(), BoxError> {
    let mut buf = vec![0u8; MAX_REQUEST_BYTES];
    let read = stream.read(&mut buf).await?;
    let request = String::from_utf8_lossy(&buf[..read]).trim().to_string();

    let peer = stream.peer_addr()?;
    log::info!("{peer}: {request:?}");

    // Menu lines point back at the address this connection arrived on.
    let local = stream.local_addr()?;
    let options =
        RenderOptions::new(local.ip().to_string(), local.port()).with_width(service.width);

    let response =
        tokio::task::spawn_blocking(move || service.fetch_and_render(&request, options)).await?;

    stream.write_all(response.as_bytes()).await?;
    stream.shutdown().await?;
    Ok(())
}
