//! # Menu Press
//!
//! A static menu page publisher for multi-branch restaurants. A JSON row
//! store is the data source: restaurants own branches, branches own menu
//! items, and each branch picks one of six visual templates for its public
//! menu page.
//!
//! # Architecture: The Publish Pipeline
//!
//! Every public page goes through the same pipeline:
//!
//! ```text
//! URL segments → resolve (slug match) → rows → typed model → group by
//! category → dispatch template → HTML
//! ```
//!
//! The interesting part is that public URLs carry *slugs*, not identifiers:
//! `/{restaurant-slug}/{branch-slug}/{template-id}`. Resolution slugifies
//! every stored name and compares against the URL segment, so the link a
//! branch publishes is derived from the same pure function that later
//! resolves it. A legacy name-based URL form is kept resolvable for links
//! published before slugs existed.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`slug`] | Unicode-preserving slug codec shared by publishing and resolution |
//! | [`normalize`] | Coerces loose store values (numbers, objects) into string keys |
//! | [`types`] | Typed domain model; `from_row` is the untyped→typed boundary |
//! | [`store`] | `MenuStore` trait and the file-backed `JsonStore` |
//! | [`resolve`] | Slug/name resolution to (restaurant, branch, items) or a structured not-found |
//! | [`group`] | Stable category grouping in canonical section order |
//! | [`render`] | Template dispatch plus the six Maud renderers |
//! | [`publish`] | Template apply write, public URL builder, stale-preview guard |
//! | [`config`] | `menu-press.toml` loading with stock defaults |
//! | [`output`] | CLI output formatting (pure `format_*` + `print_*`) |
//!
//! # Design Decisions
//!
//! ## Slug Matching Over Stored Slugs
//!
//! Slugs are never stored. The resolver recomputes them from names on every
//! pass, which keeps rename behavior obvious (rename the branch, the old
//! link dies) at the cost of a full restaurant scan per resolution. Two
//! names that collide after slugification are separated only by store order
//! (newest first) — deliberately left unresolved pending a product decision
//! on slug uniqueness.
//!
//! ## Loose Rows, One Typed Boundary
//!
//! The row store is schema-loose and has served identifiers and categories
//! as numbers or nested objects. Rather than hardening every consumer, all
//! rows cross exactly one boundary ([`types`]) where ids and categories are
//! coerced to strings; everything downstream assumes well-typed data.
//!
//! ## Closed Template Enum Over Stringly Dispatch
//!
//! Template selection is an exhaustive `match` on [`render::TemplateId`]
//! with a guaranteed default arm, not a string-keyed component lookup. A
//! stale identifier in the store renders the default template instead of a
//! broken page.
//!
//! ## Maud Over Template Engines
//!
//! HTML comes from [Maud](https://maud.lambda.xyz/): compile-time checked
//! templates, type-safe interpolation, XSS-safe escaping by default, and no
//! template directory to ship.

pub mod config;
pub mod group;
pub mod normalize;
pub mod output;
pub mod publish;
pub mod render;
pub mod resolve;
pub mod slug;
pub mod store;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
