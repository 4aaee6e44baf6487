//! Terminal rendition of query handling.
//!
//! This library plugs `query_handler_core` into ratatui: a concrete `Visual`
//! type, themed placeholder widgets, the `QueryHandler` widget (component
//! surface), `render_query` (hook surface), and config-driven providers. The
//! demo binary's state and runtime live here too so they can be tested.
//!
//! # Example
//!
//! ```rust
//! use query_handler_config::Config;
//! use query_handler_core::{QueryResult, VisualContext};
//! use query_handler_tui::{QueryHandler, QueryHandlerProvider, Visual};
//! use ratatui::{Terminal, backend::TestBackend, widgets::Paragraph};
//!
//! let root: VisualContext<Visual> = VisualContext::new();
//! let ctx = QueryHandlerProvider::from_config(&root, &Config::default());
//! let query: QueryResult<Vec<String>> = QueryResult::loading();
//!
//! let mut terminal = Terminal::new(TestBackend::new(20, 1)).unwrap();
//! terminal
//!     .draw(|f| {
//!         f.render_widget(
//!             QueryHandler::new(&ctx, Some(&query)).children(Paragraph::new("Data Loaded")),
//!             f.area(),
//!         )
//!     })
//!     .unwrap();
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod handler;
pub mod hook;
pub mod provider;
pub mod runtime;
pub mod ui;
pub mod visual;

pub use action::Action;
pub use app::App;
pub use handler::{NoChildren, QueryHandler};
pub use hook::render_query;
pub use provider::QueryHandlerProvider;
pub use visual::Visual;
