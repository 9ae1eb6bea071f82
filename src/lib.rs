//! costar — shortest co-star chains over a pre-built binary actor/film index.
//!
//! Two read-only buffers (`actordata`, `moviedata`) each hold a sorted offset
//! table followed by variable-length records that point into the other buffer.
//! Together they form a bipartite actor/film graph; `search` runs a BFS over it.

// Формат и декодирование
pub mod consts;
pub mod error;
pub mod record; // src/record/{mod,common,actor,film}.rs
pub mod index; // src/index/mod.rs

// Граф и поиск
pub mod graph;
pub mod path;
pub mod search; // src/search/{mod,options,bfs}.rs

// Хранилище, конфиг, обслуживание
pub mod config;
pub mod doctor;
pub mod lock;
pub mod metrics;
pub mod store; // src/store/{mod,buffer}.rs

pub mod testing;

// Удобные реэкспорты
pub use config::CostarConfig;
pub use error::{DecodeError, DecodeResult};
pub use graph::{Expansion, Graph};
pub use index::{find_actor, find_film, OffsetTable};
pub use path::{Hop, Path};
pub use record::{decode_actor_child_offsets, decode_film, decode_film_child_offsets, Film, Offset};
pub use search::{shortest_path, shortest_path_with, CancelToken, SearchOptions, SearchOutcome, SearchStats};
pub use store::{Buffer, Imdb, StoreStatus};
