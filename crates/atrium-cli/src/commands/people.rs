use colored::Colorize;

use atrium_core::directory;

use crate::sample;

/// Prints the recipient directory derived from the sample feed.
pub fn run(query: Option<&str>) {
    let entries = sample::feed();
    let people = directory::search(&entries, query.unwrap_or(""));

    if people.is_empty() {
        println!("{}", "No matching people".dimmed());
        return;
    }

    for person in people {
        let marker = if person.is_special { "*" } else { " " };
        println!(
            "{} {}  {} {}",
            marker,
            person.avatar,
            person.name.bold(),
            format!("({})", person.kind).dimmed()
        );
    }
}
