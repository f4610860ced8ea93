//! Test fixture generators
//!
//! CSV snippets shaped like the Bangalore restaurant export (extra columns,
//! quoted cuisine lists, "4.1/5" ratings, "1,200" costs).

use std::io::Write;
use tempfile::NamedTempFile;

pub const HEADER: &str =
    "url,address,name,online_order,book_table,rate,votes,phone,location,rest_type,dish_liked,cuisines,approx_cost(for two people),reviews_list,menu_item,listed_in(type),listed_in(city)";

/// One export row with the given core fields and filler for the rest
pub fn fixture_row(name: &str, rate: &str, votes: &str, cuisines: &str, cost: &str) -> String {
    format!(
        "https://example.test/{slug},\"1 Main Rd\",{name},Yes,No,{rate},{votes},080 000,Indiranagar,Casual Dining,,\"{cuisines}\",\"{cost}\",[],[],Delivery,Indiranagar",
        slug = name.to_lowercase().replace(' ', "-"),
    )
}

/// Small mixed table: seven clean rows, one repeat, three malformed
pub fn fixture_table() -> String {
    let rows = [
        fixture_row("Jalsa", "4.1/5", "775", "North Indian, Mughlai, Chinese", "800"),
        fixture_row("Spice Elephant", "4.1/5", "787", "Chinese, North Indian, Thai", "800"),
        fixture_row("San Churro Cafe", "3.8/5", "918", "Cafe, Mexican, Italian", "800"),
        fixture_row("Addhuri Udupi Bhojana", "3.7/5", "88", "South Indian, North Indian", "300"),
        fixture_row("Grand Village", "3.8/5", "166", "North Indian, Rajasthani", "600"),
        fixture_row("Timepass Dinner", "3.8/5", "286", "North Indian", "600"),
        fixture_row("Onesta", "4.6/5", "2556", "Pizza, Cafe, Italian", "600"),
        fixture_row("Onesta", "4.4/5", "1200", "Pizza, Cafe, Italian", "600"),
        fixture_row("Brand New Place", "NEW", "0", "Cafe", "400"),
        fixture_row("No Cost Listed", "3.9/5", "12", "Cafe", ""),
        "https://example.test/broken,short row".to_string(),
    ];

    format!("{}\n{}\n", HEADER, rows.join("\n"))
}

/// Write text (CSV or YAML) to a temp file that lives as long as the handle
pub fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file
}
