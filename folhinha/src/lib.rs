//! # folhinha
//!
//! The computation core of a Brazilian wall calendar: Sunday-first month
//! grids, national-holiday annotation, lunar-phase markers, and the view
//! models a renderer draws from.  Rendering, fetching, and printing live in
//! the embedding application; everything here is pure data in, pure data
//! out.
//!
//! This crate is a **façade** that re-exports the underlying workspace
//! crates. Application code should depend on this crate rather than the
//! individual `folhinha-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! folhinha = "0.1"
//! ```
//!
//! ```rust
//! use folhinha::astro::phase_on;
//! use folhinha::feed::parse_holidays;
//! use folhinha::time::YearMonth;
//! use folhinha::view::MonthPage;
//!
//! let holidays = parse_holidays(r#"[{"date":"2024-02-13","name":"Carnaval"}]"#);
//! let page = MonthPage::build(YearMonth::new(2024, 2), &holidays, phase_on);
//!
//! assert_eq!(page.grid().leading_blanks(), 4); // February 2024 starts on a Thursday
//! assert!(page.holidays().contains_day(13)); // Carnaval
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Dates, weekdays, months, and the month grid.
pub use folhinha_time as time;

/// Lunar phase computation.
pub use folhinha_astro as astro;

/// Holiday and weather feed models.
pub use folhinha_feed as feed;

/// Annotations and the calendar view models.
pub use folhinha_view as view;
