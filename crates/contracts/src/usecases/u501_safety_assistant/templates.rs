//! Reply texts of the safety assistant

use super::rules::Category;
use crate::domain::a001_site::Site;

/// First assistant message of every chat session
pub fn greeting() -> &'static str {
    "Hi! I'm your Farm Safety Assistant. I can help you with:

• **Report incidents** - Tell me what happened, I'll document it
• **Schedule audits** - I'll help plan and track safety inspections
• **Compliance planning** - Ask me about Iowa ag safety regulations
• **Analyze data** - Get insights from your safety records
• **Manage hazards** - Track and mitigate risks across your sites
• **Crew & equipment** - Keep records organized

Just tell me what you need, or ask me a question. I'm here to make farm safety simple."
}

/// Render the reply for `category`. Incident, audit and analytics replies read `sites`.
pub fn render(category: Category, sites: &[Site]) -> String {
    match category {
        Category::Incident => incident(sites),
        Category::Audit => audit(sites),
        Category::Compliance => COMPLIANCE.to_string(),
        Category::Hazard => HAZARD.to_string(),
        Category::Crew => CREW.to_string(),
        Category::Equipment => EQUIPMENT.to_string(),
        Category::Analytics => analytics(sites),
        Category::Default => DEFAULT.to_string(),
    }
}

fn incident(sites: &[Site]) -> String {
    let names = sites
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "I'll help you report this incident. To create a complete record, I need a few details:

1. **Which site?** ({names})
2. **What happened?** Brief description
3. **When?** Date and time
4. **Anyone injured?** If yes, what kind of injury?
5. **Equipment involved?** Any machinery or tools?

Just tell me in your own words, and I'll fill out the official incident report for you. You can review and approve it before we file it."
    )
}

fn audit(sites: &[Site]) -> String {
    let lines = sites
        .iter()
        .map(|s| format!("• {} - Last audit: {}", s.name, s.last_audit_str()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "I can help you schedule and conduct a safety audit.

**Upcoming audits needed:**
{lines}

Would you like me to:
- Start an audit checklist for a specific site?
- Schedule audits for multiple sites?
- Generate a compliance report from past audits?

Which site would you like to start with?"
    )
}

fn analytics(sites: &[Site]) -> String {
    let total: u32 = sites.iter().map(|s| s.incidents).sum();
    let count = sites.len();
    let next_due = sites.first().map(|s| s.name.as_str()).unwrap_or("n/a");

    format!(
        "I can analyze your safety data to find patterns and insights.

**Available Analytics:**
📊 Incident trends across sites
📅 Seasonal risk patterns
⚠️ Most common hazard types
✅ Compliance status by site
👥 Crew safety performance
🔧 Equipment incident rates

Based on your current data:
• {total} total incidents recorded
• {count} active sites
• Next audit due: {next_due}

What would you like me to analyze? I can create custom reports for any timeframe or category."
    )
}

const COMPLIANCE: &str = "Iowa agricultural operations need to follow several key safety regulations:

**Key Iowa Ag Safety Requirements:**
• OSHA agricultural standards (grain handling, confined spaces)
• Pesticide applicator certification (Iowa Dept of Ag)
• Animal facility ventilation standards
• Equipment safety (PTO guards, ROPS on tractors)
• Employee training documentation

I can help you:
- Create compliance plans for each site
- Track certification renewals
- Generate required documentation
- Schedule training sessions

What specific compliance area do you need help with?";

const HAZARD: &str = "I'll help you manage hazards across your operations. Common farm hazards in Iowa include:

• Chemical storage (pesticides, fertilizers)
• Confined space entry (silos, manure pits)
• Equipment operation (tractors, combines)
• Livestock handling
• Grain bin entry
• Weather-related (heat stress, cold exposure)

Would you like to:
- Document a new hazard?
- Review hazards at a specific site?
- Create a hazard mitigation plan?
- Get safety recommendations?

Tell me which site or hazard type you want to address.";

const CREW: &str = "I can help manage your crew safety records and training.

**What I can do:**
• Track employee safety training and certifications
• Schedule and log safety meetings
• Manage PPE assignments
• Record work hours and site assignments
• Generate crew safety reports

What would you like to help with? For example:
- \"Add a new crew member\"
- \"Who needs recertification?\"
- \"Schedule a safety meeting\"
- \"Show crew assignments for [site name]\"";

const EQUIPMENT: &str = "I'll help you track equipment safety and maintenance.

**Equipment Safety Management:**
• Maintenance schedules and logs
• Safety inspection records
• Pre-operation checklists
• Equipment-specific hazards
• ROPS and guard verification

Would you like to:
- Add new equipment to the system?
- Log a maintenance issue?
- Schedule equipment inspections?
- View equipment history for a site?

Just let me know what you need.";

const DEFAULT: &str = "I'm here to help with your farm safety needs. I can assist with:

• **Incident reporting** - Quick documentation of accidents or near-misses
• **Safety audits** - Schedule and conduct inspections
• **Compliance** - Iowa ag regulations and requirements
• **Hazard management** - Identify and track risks
• **Crew safety** - Training, certifications, and records
• **Equipment** - Safety inspections and maintenance
• **Analytics** - Insights from your safety data

What would you like help with today?";
