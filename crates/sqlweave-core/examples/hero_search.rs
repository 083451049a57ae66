//! Hero Search - Optional Criteria Example
//!
//! This example builds the queries behind a search form where every field is
//! optional:
//! - Blank form fields drop their clause
//! - Multi-select filters become inline `IN` lists
//! - Results are paginated with a window function
//!
//! Run with: cargo run --example hero_search

use sqlweave_core::builder::literal::quote_all;
use sqlweave_core::{delete, op, select, update, Clauses, Query};

// =============================================================================
// SEARCH FORM
// =============================================================================

/// What the user typed. Empty strings and `None` mean "no filter".
struct HeroSearch<'a> {
    name: &'a str,
    city: Option<&'a str>,
    min_level: Option<i64>,
    max_level: Option<i64>,
    powers: Vec<&'a str>,
    page: i64,
    page_size: i64,
}

fn search_clauses(search: &HeroSearch<'_>) -> Clauses {
    let name_pattern = (!search.name.is_empty()).then(|| format!("%{}%", search.name));
    Clauses::when("h.name", op::like, name_pattern)
        .and_if("h.city", op::eq, search.city)
        .and_if_pair("h.level", op::between, search.min_level, search.max_level)
        // Open-ended level ranges, only when the BETWEEN above was skipped.
        .and_if_checked("h.level", op::gt_eq, search.min_level, |min: &Option<i64>| {
            min.is_some() && search.max_level.is_none()
        })
        .and_if_checked("h.level", op::lt_eq, search.max_level, |max: &Option<i64>| {
            max.is_some() && search.min_level.is_none()
        })
        .and_with(|| {
            (!search.powers.is_empty()).then(|| {
                let powers = select().field("1").from("hero_powers p").where_clause(
                    &Clauses::new()
                        .field("p.hero_id = h.id")
                        .and()
                        .field("p.power")
                        .in_list(quote_all(&search.powers)),
                );
                Clauses::new().exists(&powers)
            })
        })
}

fn print_query(description: &str, query: &Query) {
    println!("-- {description}");
    println!("{query};");
    println!("-- values: {:?}", query.values());
    println!();
}

// =============================================================================
// EXAMPLE QUERIES
// =============================================================================

fn main() {
    let search = HeroSearch {
        name: "man",
        city: None,
        min_level: Some(10),
        max_level: Some(50),
        powers: vec!["flight", "x-ray vision"],
        page: 2,
        page_size: 20,
    };

    // 1. Paginated search
    let first = (search.page - 1) * search.page_size;
    let listing = select()
        .field("h.id")
        .field("h.name")
        .field("h.level")
        .from("heroes h")
        .where_clause(&search_clauses(&search))
        .window_by_row_number("page", "rn", "h.level DESC", first, first + search.page_size);
    match listing {
        Ok(listing) => print_query("Heroes, page 2", &listing.build()),
        Err(e) => eprintln!("-- cannot paginate: {e}"),
    }

    // 2. Same criteria, counted per city
    let per_city = select()
        .field("h.city")
        .field("count(*)")
        .alias("heroes")
        .from("heroes h")
        .where_clause(&search_clauses(&search))
        .group_by("h.city")
        .having(&Clauses::when("count(*)", op::gt_eq, 2))
        .order_by("heroes")
        .desc()
        .build();
    print_query("Heroes per city", &per_city);

    // 3. A mostly blank form keeps only its filled-in criterion
    let blank = HeroSearch {
        name: "",
        city: None,
        min_level: None,
        max_level: Some(50),
        powers: vec![],
        page: 1,
        page_size: 20,
    };
    let filtered = select().field("*").from("heroes h").where_clause(&search_clauses(&blank));
    print_query("Mostly blank search", &filtered.build());

    // 4. Retire the heroes matching the search
    let retire = update("heroes h")
        .field("h.retired", true)
        .field("h.city", None::<&str>)
        .where_clause(&search_clauses(&search))
        .build();
    print_query("Retire matching heroes", &retire);

    // 5. Purge retired heroes of a city, if any city was given
    let purge = delete("heroes").where_clause(
        &Clauses::when("city", op::eq, search.city).and_if("retired", op::eq, true),
    );
    print_query("Purge retired heroes", &purge.build());
}
