use anyhow::{Context, Result};
use colored::Colorize;

use atrium_application::{ComposerService, InMemoryFeed};
use atrium_core::composer::{Mutation, PaymentMethod, PrimaryAction, SubmitOutcome, catalog};
use atrium_core::config::ConfigRoot;
use atrium_core::feed::HostFeed;
use atrium_core::person::Person;

use crate::sample;

/// Drives a scripted composer session against the sample feed and prints
/// the appended events.
pub fn run(config: ConfigRoot) -> Result<()> {
    let mut service =
        ComposerService::new(config.operator, InMemoryFeed::with_entries(sample::feed()));
    let seeded = service.feed().len();

    println!("{}", "Recipient directory".bold().underline());
    for person in service.people() {
        println!("  {}  {} ({})", person.avatar, person.name, person.kind);
    }

    let sarah = find_person(&service, "Sarah Chen")?;
    let marcus = find_person(&service, "Marcus Johnson")?;
    let alex = find_person(&service, "Alex Rivera")?;

    // A plain message to one guest.
    println!();
    println!("{}", "1. Message a guest".bold().underline());
    service.apply(Mutation::AddRecipient(sarah.clone()));
    service.apply(Mutation::SetFreeText(
        "Doors open at 7, performance starts at 7:30".to_string(),
    ));
    report(service.submit());

    // An immediate walk-up sale.
    println!();
    println!("{}", "2. Walk-up sale".bold().underline());
    let ticket = catalog()
        .into_iter()
        .find(|i| i.id == "ticket")
        .context("catalog should offer tickets")?;
    service.apply(Mutation::CartAdd(ticket.clone()));
    service.apply(Mutation::CartAdd(ticket));
    service.apply(Mutation::SetPaymentMethod(Some(PaymentMethod::Cash)));
    print_pills(&service);
    report(service.submit());

    // The same purchase deferred to a staff member instead.
    println!();
    println!("{}", "3. Deferred purchase".bold().underline());
    service.apply(Mutation::AddRecipient(alex));
    let wine = catalog()
        .into_iter()
        .find(|i| i.id == "wine")
        .context("catalog should offer wine")?;
    service.apply(Mutation::CartAdd(wine));
    service.apply(Mutation::SetAssign(true));
    if let Some(summary) = service.intent_summary() {
        println!("  intent: {}", summary.italic());
    }
    report(service.submit());

    // Check-in: first blocked (no guest), then two guests at once.
    println!();
    println!("{}", "4. Check-in".bold().underline());
    service.apply(Mutation::SetPrimaryAction(PrimaryAction::CheckIn));
    report(service.submit());
    service.apply(Mutation::AddRecipient(sarah));
    service.apply(Mutation::AddRecipient(marcus));
    service.apply(Mutation::SetFreeText("VIP list".to_string()));
    report(service.submit());

    println!();
    println!("{}", "Appended events".bold().underline());
    for entry in &service.feed().entries()[seeded..] {
        println!("{}", serde_json::to_string_pretty(entry)?);
    }

    Ok(())
}

fn find_person(service: &ComposerService<InMemoryFeed>, name: &str) -> Result<Person> {
    service
        .people()
        .into_iter()
        .find(|p| p.name == name)
        .with_context(|| format!("sample feed should contain {name}"))
}

fn print_pills(service: &ComposerService<InMemoryFeed>) {
    let labels: Vec<String> = service.pills().iter().map(|p| p.label()).collect();
    println!("  pills: [{}]", labels.join("] ["));
}

fn report(outcome: SubmitOutcome) {
    match outcome {
        SubmitOutcome::Emitted(events) => {
            println!("  {} {} event(s)", "emitted".green(), events.len());
        }
        SubmitOutcome::Blocked(reason) => {
            println!("  {} {}", "blocked:".yellow(), reason.hint());
        }
    }
}
