use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ticket {
    id: u32,
    holder: String,
    seats: u32,
    punches: u32,
}

#[derive(Debug)]
struct TicketCreate {
    holder: String,
    seats: u32,
}

#[derive(Clone, Debug)]
enum TicketAction {
    Punch,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum TicketError {
    #[error("Ticket needs at least one seat")]
    NoSeats,
    #[error("Ticket {0} is fully punched")]
    Exhausted(u32),
}

#[async_trait]
impl ActorEntity for Ticket {
    type Id = u32;
    type Create = TicketCreate;
    type Action = TicketAction;
    type ActionResult = u32;
    type Context = ();
    type Error = TicketError;

    fn from_create_params(id: u32, params: TicketCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            holder: params.holder,
            seats: params.seats,
            punches: 0,
        })
    }

    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        if self.seats == 0 {
            return Err(TicketError::NoSeats);
        }
        Ok(())
    }

    fn natural_key(params: &TicketCreate) -> Option<String> {
        Some(params.holder.clone())
    }

    async fn on_upsert(
        &mut self,
        params: TicketCreate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        self.seats = params.seats;
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: TicketAction,
        _ctx: &Self::Context,
    ) -> Result<u32, Self::Error> {
        match action {
            TicketAction::Punch => {
                if self.punches == self.seats {
                    return Err(TicketError::Exhausted(self.id));
                }
                self.punches += 1;
                Ok(self.punches)
            }
        }
    }
}

fn ticket(holder: &str, seats: u32) -> TicketCreate {
    TicketCreate {
        holder: holder.into(),
        seats,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::new(10);
    tokio::spawn(actor.run(()));

    // 1. Create
    let alice: Ticket = client.create(ticket("Alice", 1)).await.unwrap();
    assert_eq!(alice.id, 1); // First ID should be 1

    // 2. Upsert by holder: updates in place
    let upserted = client.upsert(ticket("Alice", 2)).await.unwrap();
    assert!(!upserted.created);
    assert_eq!(upserted.entity.id, 1);
    assert_eq!(upserted.entity.seats, 2);

    // 3. Upsert a new holder: creates
    let bob = client.upsert(ticket("Bob", 1)).await.unwrap();
    assert!(bob.created);
    assert_eq!(bob.entity.id, 2);

    // 4. Broadcast visits everyone in id order
    let punched = client.broadcast(TicketAction::Punch).await.unwrap();
    assert_eq!(punched, vec![(1, 1), (2, 1)]);

    // 5. Bob is exhausted now; his failure is skipped, Alice still advances
    let punched = client.broadcast(TicketAction::Punch).await.unwrap();
    assert_eq!(punched, vec![(1, 2)]);

    // 6. Read back
    let all = client.list().await.unwrap();
    assert_eq!(
        all.iter().map(|t| t.holder.as_str()).collect::<Vec<_>>(),
        ["Alice", "Bob"]
    );
    assert_eq!(client.get(1).await.unwrap().unwrap().punches, 2);
    assert!(client.get(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_rejected_create_does_not_consume_id() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(ticket("Nobody", 0)).await.unwrap_err();
    assert_eq!(
        err.into_entity_error::<TicketError>().unwrap(),
        TicketError::NoSeats
    );
    assert!(client.list().await.unwrap().is_empty());

    let first = client.create(ticket("Alice", 1)).await.unwrap();
    assert_eq!(first.id, 1);
}

#[tokio::test]
async fn test_broadcast_on_empty_store() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    tokio::spawn(actor.run(()));

    let punched = client.broadcast(TicketAction::Punch).await.unwrap();
    assert!(punched.is_empty());
}

#[tokio::test]
async fn test_concurrent_creates_get_distinct_ids() {
    let (actor, client) = ResourceActor::<Ticket>::new(4);
    tokio::spawn(actor.run(()));

    let handles: Vec<_> = (0..50)
        .map(|n| {
            let client = client.clone();
            tokio::spawn(async move { client.create(ticket(&format!("guest-{n}"), 1)).await })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=50).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_closed_actor_reports_error() {
    let (actor, client) = ResourceActor::<Ticket>::new(10);
    drop(actor);

    let result = client.list().await;
    assert!(matches!(result, Err(FrameworkError::ActorClosed)));
}
