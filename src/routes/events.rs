use actix_web::{Error, HttpRequest, HttpResponse, get, web};
use actix_ws::Message;
use futures_util::StreamExt;
use tokio::sync::broadcast::error::RecvError;

use crate::events::EventBus;

/// WebSocket feed of order and delivery events. Unauthenticated, like the
/// rest of the read-only realtime channel.
#[get("/events")]
pub async fn events_handler(
    req: HttpRequest,
    stream: web::Payload,
    bus: web::Data<EventBus>,
) -> Result<HttpResponse, Error> {
    let (response, mut session, mut msg_stream) = actix_ws::handle(&req, stream)?;
    let mut events = bus.subscribe();

    actix_web::rt::spawn(async move {
        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Ok(event) => {
                        let frame = match serde_json::to_string(&event) {
                            Ok(frame) => frame,
                            Err(err) => {
                                log::error!("Failed to serialize event: {err}");
                                continue;
                            }
                        };
                        if session.text(frame).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        log::warn!("event subscriber lagged, dropped {skipped} events");
                    }
                    Err(RecvError::Closed) => break,
                },
                msg = msg_stream.next() => match msg {
                    Some(Ok(Message::Ping(bytes))) => {
                        if session.pong(&bytes).await.is_err() {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(reason))) => {
                        let _ = session.close(reason).await;
                        return;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(_)) | None => break,
                },
            }
        }
        let _ = session.close(None).await;
    });

    Ok(response)
}
