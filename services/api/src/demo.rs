use crate::infra::InMemoryDocumentStore;
use clap::Args;
use serde_json::{json, Value};
use std::sync::Arc;
use talent_ops::error::AppError;
use talent_ops::workforce::{parse_resume_text, InsightRequest, WorkforceService};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Horizon in days for the workforce insights portion
    #[arg(long, default_value_t = talent_ops::workforce::DEFAULT_HORIZON_DAYS)]
    pub(crate) horizon_days: u16,
    /// Skip the resume parsing portion of the demo
    #[arg(long)]
    pub(crate) skip_resume: bool,
}

const SAMPLE_RESUME: &str = "Jane Doe\njane@x.com\n8+ years experience across python, docker and aws\nPreviously: platform engineering at a logistics startup";

/// End-to-end CLI walkthrough against an in-memory store: seed the demo
/// organization, record some activity, and print the derived views.
pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = WorkforceService::new(Arc::new(InMemoryDocumentStore::default()));

    println!("Talent Ops workforce demo");
    let summary = service.seed_demo()?;
    println!(
        "Seeded {} executives, {} team leads, {} employees, {} teams",
        summary.executives.len(),
        summary.team_leads.len(),
        summary.employees.len(),
        summary.teams.len()
    );

    println!("\nOrganization");
    for user in service.list("user", None)? {
        println!(
            "- {} <{}> ({}, {})",
            field(&user, "name"),
            field(&user, "email"),
            field(&user, "role"),
            field(&user, "department"),
        );
    }

    record_sample_activity(&service, &summary.employees)?;

    let insights = service.insights(InsightRequest {
        horizon_days: args.horizon_days,
    })?;
    println!("\nWorkforce insights ({}-day horizon)", args.horizon_days);
    println!(
        "- size {} | completion {}% | utilization {}% | {} open roles | {} open tickets",
        insights.summary.workforce_size,
        insights.summary.task_completion_rate,
        insights.summary.utilization_pct,
        insights.summary.open_roles,
        insights.summary.tickets_open
    );
    println!("- {}", insights.narrative);

    if args.skip_resume {
        return Ok(());
    }

    println!("\nResume parse demo");
    let parsed = parse_resume_text(SAMPLE_RESUME);
    println!("- name: {}", parsed.name.as_deref().unwrap_or("(none)"));
    println!("- email: {}", parsed.email.as_deref().unwrap_or("(none)"));
    println!("- skills: {}", parsed.skills.join(", "));
    match parsed.years_experience {
        Some(years) => println!("- years of experience: {years}"),
        None => println!("- years of experience: (none)"),
    }

    Ok(())
}

fn record_sample_activity(
    service: &WorkforceService<InMemoryDocumentStore>,
    employees: &[String],
) -> Result<(), AppError> {
    let assignee = employees.first().map(String::as_str).unwrap_or("unknown");

    service.create_record(
        talent_ops::entities::EntityKind::Task,
        json!({
            "title": "Prepare onboarding checklist",
            "assignee_id": assignee,
            "status": "done",
        }),
    )?;
    service.create_record(
        talent_ops::entities::EntityKind::Task,
        json!({
            "title": "Review Q3 hiring plan",
            "assignee_id": assignee,
        }),
    )?;
    service.create_record(
        talent_ops::entities::EntityKind::Job,
        json!({
            "title": "Senior Platform Engineer",
            "department": "Engineering",
            "location": "Remote",
        }),
    )?;
    service.create_record(
        talent_ops::entities::EntityKind::Ticket,
        json!({
            "user_id": assignee,
            "subject": "VPN access",
            "message": "Cannot reach the staging network.",
        }),
    )?;

    for employee in employees {
        service.create_record(
            talent_ops::entities::EntityKind::Timesheet,
            json!({
                "user_id": employee,
                "date": "2026-08-03",
                "hours": 7.5,
            }),
        )?;
    }

    service.check_in(assignee, Some("09:00".to_string()))?;
    service.check_out(assignee, Some("17:30".to_string()))?;

    Ok(())
}

fn field<'a>(document: &'a Value, name: &str) -> &'a str {
    document
        .get(name)
        .and_then(Value::as_str)
        .unwrap_or("(unset)")
}
