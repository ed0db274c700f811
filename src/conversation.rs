use crate::{
    ConversationError, EchoResponder, Message, MessageId, MessageObserver, MessageStore, Responder,
    ValidationError,
};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{JoinHandle, JoinSet};

enum Command {
    Submit(Message),
    Subscribe(Arc<dyn MessageObserver>),
    Snapshot(oneshot::Sender<Vec<Message>>),
}

/// Owns the message log and is the only thing that ever appends to it.
///
/// Callers talk to it through a [`ConversationHandle`]. Once [`run`](Self::run) is
/// going, every submission is appended in the order it was sent, its echo is started,
/// and each finished echo is appended and announced to observers as soon as it
/// completes. All of that happens inside the one owner loop, so the store needs no
/// lock.
pub struct Conversation {
    store: MessageStore,
    observers: Vec<Arc<dyn MessageObserver>>,
    responder: Arc<dyn Responder>,
    commands: mpsc::UnboundedReceiver<Command>,
    echoes: JoinSet<(MessageId, Message)>,
}

impl Conversation {
    pub fn new(responder: Arc<dyn Responder>) -> (Self, ConversationHandle) {
        let (commands_tx, commands) = mpsc::unbounded_channel();
        let conversation = Self {
            store: MessageStore::new(),
            observers: Vec::new(),
            responder,
            commands,
            echoes: JoinSet::new(),
        };
        (conversation, ConversationHandle { commands: commands_tx })
    }

    pub fn with_echo() -> (Self, ConversationHandle) {
        Self::new(Arc::new(EchoResponder::new()))
    }

    pub fn subscribe(&mut self, observer: Arc<dyn MessageObserver>) -> &mut Self {
        self.observers.push(observer);
        self
    }

    pub fn spawn(self) -> JoinHandle<MessageStore> {
        tokio::spawn(self.run())
    }

    /// Drives the conversation until every handle is dropped and the last pending
    /// echo has been appended, then hands back the finished transcript.
    pub async fn run(mut self) -> MessageStore {
        let mut open = true;
        loop {
            tokio::select! {
                biased;

                command = self.commands.recv(), if open => match command {
                    Some(command) => self.handle(command),
                    None => {
                        log::debug!(
                            "All handles dropped, waiting on {} pending echoes",
                            self.echoes.len()
                        );
                        open = false;
                    }
                },
                Some(joined) = self.echoes.join_next(), if !self.echoes.is_empty() => {
                    match joined {
                        Ok((trigger, reply)) => {
                            log::debug!("Echo for message {trigger} arrived as {}", reply.id());
                            self.append(reply);
                        }
                        Err(e) => log::error!("Echo task failed with error: {e}"),
                    }
                }
                else => break,
            }
        }
        log::info!("Conversation ended with {} messages", self.store.len());
        self.store
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Submit(message) => {
                let trigger = *message.id();
                let text = message.text().to_string();
                self.append(message);
                self.spawn_echo(trigger, text);
            }
            Command::Subscribe(observer) => {
                self.observers.push(observer);
            }
            Command::Snapshot(reply_to) => {
                // the asker may have given up waiting
                let _ = reply_to.send(self.store.messages().to_vec());
            }
        }
    }

    // the trigger is already in the store by the time this runs, so its reply can
    // only ever land after it
    fn spawn_echo(&mut self, trigger: MessageId, text: String) {
        let responder = self.responder.clone();
        log::trace!("Scheduling echo for message {trigger}");
        self.echoes.spawn(async move {
            let reply = responder.respond(&text).await;
            (trigger, Message::reply(reply))
        });
    }

    fn append(&mut self, message: Message) {
        let stored = self.store.append(message);
        log::debug!(
            "Appended message {} (from current user: {})",
            stored.id(),
            stored.is_from_current_user()
        );
        for observer in &self.observers {
            observer.on_message_appended(stored);
        }
    }
}

/// Cheap, cloneable front door to a running [`Conversation`]. Submitting never
/// blocks and does not need to happen on a Tokio runtime.
#[derive(Clone)]
pub struct ConversationHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl ConversationHandle {
    /// Sends `text` as a user message and returns it. Blank input is ignored and
    /// yields `None`, as does a conversation that has already shut down.
    pub fn submit(&self, text: &str) -> Option<Message> {
        match self.try_submit(text) {
            Ok(message) => Some(message),
            Err(ConversationError::Rejected(e)) => {
                log::debug!("Ignoring submission: {e}");
                None
            }
            Err(ConversationError::Closed) => {
                log::warn!("Dropping submission, conversation is closed");
                None
            }
        }
    }

    /// Like [`submit`](Self::submit), but says why nothing was sent.
    pub fn try_submit(&self, text: &str) -> Result<Message, ConversationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::Empty.into());
        }

        let message = Message::from_user(text);
        self.commands
            .send(Command::Submit(message.clone()))
            .map_err(|_| ConversationError::Closed)?;
        Ok(message)
    }

    pub fn subscribe(&self, observer: Arc<dyn MessageObserver>) -> Result<(), ConversationError> {
        self.commands
            .send(Command::Subscribe(observer))
            .map_err(|_| ConversationError::Closed)
    }

    /// Everything appended so far, including any submission sent from this handle
    /// before the call.
    pub async fn messages(&self) -> Result<Vec<Message>, ConversationError> {
        let (reply_to, snapshot) = oneshot::channel();
        self.commands
            .send(Command::Snapshot(reply_to))
            .map_err(|_| ConversationError::Closed)?;
        snapshot.await.map_err(|_| ConversationError::Closed)
    }
}
