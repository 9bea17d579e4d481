use axum::{
    debug_handler,
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use tracing::{debug, warn};

use super::{hub::Hub, msg::ClientEvent, session::Session};

#[debug_handler(state = crate::AppState)]
pub async fn relay_ws(State(hub): State<Hub>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |stream| serve_socket(hub, stream))
}

async fn serve_socket(hub: Hub, stream: WebSocket) {
    let (mut session, mut inbox) = Session::connect(&hub);
    let (mut sender, mut receiver) = stream.split();

    let id = session.id();
    let mut forward_task = tokio::spawn(async move {
        while let Some(event) = inbox.recv().await {
            let frame = match event.to_frame() {
                Ok(frame) => frame,
                Err(err) => {
                    warn!(%id, %err, "dropping unencodable event");
                    continue;
                }
            };
            if sender.send(Message::Text(frame.into())).await.is_err() {
                break;
            }
        }
    });

    loop {
        tokio::select! {
            incoming = receiver.next() => {
                let Some(Ok(msg)) = incoming else {
                    break;
                };
                let data = match msg {
                    Message::Text(text) => text.as_str().as_bytes().to_vec(),
                    Message::Binary(bytes) => bytes.to_vec(),
                    Message::Close(_) => break,
                    Message::Ping(_) | Message::Pong(_) => continue,
                };
                let event = match ClientEvent::from_frame(&data) {
                    Ok(event) => event,
                    Err(err) => {
                        warn!(%id, %err, "skipping undecodable frame");
                        continue;
                    }
                };
                if let Err(err) = session.handle(event) {
                    debug!(%id, %err, "event rejected");
                    break;
                }
            }
            // the sink failed, the client is gone
            _ = &mut forward_task => break,
        }
    }

    session.disconnect();
    forward_task.abort();
}
