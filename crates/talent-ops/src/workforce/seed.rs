//! Demo organization seeding.
//!
//! Idempotent by lookup key: users by email, employee records by user id,
//! teams by name. The check-then-create sequence is not atomic; duplicates
//! under concurrent seeding are an accepted risk at this layer.

use serde::Serialize;
use serde_json::json;

use super::service::{WorkforceError, WorkforceService};
use crate::entities::{EntityKind, UserRole};
use crate::store::{DocumentStore, Filter};

/// Identifiers of the seeded organization, grouped by level.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeedSummary {
    pub executives: Vec<String>,
    pub team_leads: Vec<String>,
    pub employees: Vec<String>,
    pub teams: Vec<String>,
}

pub(crate) fn run<S: DocumentStore + 'static>(
    service: &WorkforceService<S>,
) -> Result<SeedSummary, WorkforceError> {
    let ceo = get_or_create_user(
        service,
        "Ava Patel",
        "ava.patel@demo.co",
        UserRole::Executive,
        Some("Executive"),
    )?;
    let vp_ops = get_or_create_user(
        service,
        "Liam Chen",
        "liam.chen@demo.co",
        UserRole::Executive,
        Some("Executive"),
    )?;

    let eng_lead = get_or_create_user(
        service,
        "Maya Ross",
        "maya.ross@demo.co",
        UserRole::TeamLead,
        Some("Engineering"),
    )?;
    let design_lead = get_or_create_user(
        service,
        "Noah Green",
        "noah.green@demo.co",
        UserRole::TeamLead,
        Some("Design"),
    )?;

    let emma = get_or_create_user(
        service,
        "Emma Johnson",
        "emma.johnson@demo.co",
        UserRole::Employee,
        Some("Engineering"),
    )?;
    let oliver = get_or_create_user(
        service,
        "Oliver Smith",
        "oliver.smith@demo.co",
        UserRole::Employee,
        Some("Engineering"),
    )?;
    let sophia = get_or_create_user(
        service,
        "Sophia Davis",
        "sophia.davis@demo.co",
        UserRole::Employee,
        Some("Engineering"),
    )?;

    let jack = get_or_create_user(
        service,
        "Jack Wilson",
        "jack.wilson@demo.co",
        UserRole::Employee,
        Some("Design"),
    )?;
    let mia = get_or_create_user(
        service,
        "Mia Thompson",
        "mia.thompson@demo.co",
        UserRole::Employee,
        Some("Design"),
    )?;

    let staff = [
        (&ceo, "EMP1001", "Chief Executive Officer", None, "Executive", "NYC", 300_000.0),
        (&vp_ops, "EMP1002", "VP, Operations", Some(&ceo), "Executive", "NYC", 220_000.0),
        (&eng_lead, "EMP2001", "Engineering Lead", Some(&vp_ops), "Engineering", "Remote", 180_000.0),
        (&design_lead, "EMP3001", "Design Lead", Some(&vp_ops), "Design", "Remote", 170_000.0),
        (&emma, "EMP2002", "Senior Software Engineer", Some(&eng_lead), "Engineering", "Remote", 150_000.0),
        (&oliver, "EMP2003", "Software Engineer", Some(&eng_lead), "Engineering", "Remote", 130_000.0),
        (&sophia, "EMP2004", "QA Engineer", Some(&eng_lead), "Engineering", "Remote", 120_000.0),
        (&jack, "EMP3002", "Product Designer", Some(&design_lead), "Design", "Remote", 125_000.0),
        (&mia, "EMP3003", "UX Researcher", Some(&design_lead), "Design", "Remote", 115_000.0),
    ];
    for (user_id, employee_id, title, manager_id, team, location, salary) in staff {
        ensure_employee(
            service,
            user_id,
            employee_id,
            title,
            manager_id.map(String::as_str),
            team,
            location,
            salary,
        )?;
    }

    ensure_team(
        service,
        "Engineering",
        &eng_lead,
        &[&eng_lead, &emma, &oliver, &sophia],
    )?;
    ensure_team(service, "Design", &design_lead, &[&design_lead, &jack, &mia])?;
    ensure_team(service, "Executive", &ceo, &[&ceo, &vp_ops])?;

    Ok(SeedSummary {
        executives: vec![ceo, vp_ops],
        team_leads: vec![eng_lead, design_lead],
        employees: vec![emma, oliver, sophia, jack, mia],
        teams: vec![
            "Engineering".to_string(),
            "Design".to_string(),
            "Executive".to_string(),
        ],
    })
}

fn get_or_create_user<S: DocumentStore + 'static>(
    service: &WorkforceService<S>,
    name: &str,
    email: &str,
    role: UserRole,
    department: Option<&str>,
) -> Result<String, WorkforceError> {
    if let Some(existing) = service.find_one(EntityKind::User, Filter::new().field("email", email))?
    {
        return Ok(existing.id);
    }

    service.create_record(
        EntityKind::User,
        json!({
            "name": name,
            "email": email,
            "role": role,
            "department": department,
        }),
    )
}

#[allow(clippy::too_many_arguments)]
fn ensure_employee<S: DocumentStore + 'static>(
    service: &WorkforceService<S>,
    user_id: &str,
    employee_id: &str,
    title: &str,
    manager_id: Option<&str>,
    team: &str,
    location: &str,
    salary: f64,
) -> Result<String, WorkforceError> {
    if let Some(existing) =
        service.find_one(EntityKind::Employee, Filter::new().field("user_id", user_id))?
    {
        return Ok(existing.id);
    }

    service.create_record(
        EntityKind::Employee,
        json!({
            "user_id": user_id,
            "employee_id": employee_id,
            "title": title,
            "manager_id": manager_id,
            "team": team,
            "location": location,
            "salary": salary,
        }),
    )
}

fn ensure_team<S: DocumentStore + 'static>(
    service: &WorkforceService<S>,
    name: &str,
    lead_user_id: &str,
    members: &[&String],
) -> Result<String, WorkforceError> {
    if let Some(existing) = service.find_one(EntityKind::Team, Filter::new().field("name", name))? {
        return Ok(existing.id);
    }

    service.create_record(
        EntityKind::Team,
        json!({
            "name": name,
            "lead_user_id": lead_user_id,
            "members": members,
        }),
    )
}
