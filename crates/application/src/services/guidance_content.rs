//! Built-in guidance content for every routed module

use domain::{GuidanceBundle, GuidanceModule};

/// Bundles shipped with the application, one per routed module
pub(crate) fn builtin_bundles() -> Vec<(GuidanceModule, GuidanceBundle)> {
    vec![
        (GuidanceModule::Dashboard, dashboard()),
        (GuidanceModule::Organization, organization()),
        (GuidanceModule::Employees, employees()),
        (GuidanceModule::Recruitment, recruitment()),
        (GuidanceModule::Attendance, attendance()),
        (GuidanceModule::Payroll, payroll()),
        (GuidanceModule::Performance, performance()),
        (GuidanceModule::Learning, learning()),
        (GuidanceModule::Reports, reports()),
        (GuidanceModule::Helpdesk, helpdesk()),
    ]
}

fn dashboard() -> GuidanceBundle {
    GuidanceBundle::new(
        "Dashboard",
        "Welcome to the HR dashboard. Here you get an overview of your workforce at a glance.",
        "The top row shows key figures for headcount, attendance and open positions. \
         Below you find recent activities and upcoming events.",
    )
    .with_actions([
        "Select a key figure card to open the module behind it.",
        "Use the quick actions panel to add an employee or approve leave requests.",
        "Scroll down to review recent activities and upcoming events.",
    ])
    .with_tips([
        "Key figures refresh every time you return to the dashboard.",
        "Pending approvals are highlighted so nothing slips through.",
    ])
    .with_shortcuts([
        "Press G then D to return to the dashboard from anywhere.",
        "Press question mark to open contextual help.",
    ])
    .with_common_tasks([
        "Review today's attendance summary.",
        "Approve pending leave requests.",
        "Check upcoming birthdays and work anniversaries.",
    ])
}

fn organization() -> GuidanceBundle {
    GuidanceBundle::new(
        "Organization",
        "Welcome to the organization module. Here you manage departments, teams and reporting lines.",
        "The organization chart is in the center. Department details open in a panel on the right.",
    )
    .with_actions([
        "Select a department to see its teams and members.",
        "Use the add department button to create a new unit.",
        "Drag a team onto another department to change its reporting line.",
    ])
    .with_tips([
        "Collapse branches of the chart to focus on one part of the organization.",
        "Every department needs a manager before it can receive employees.",
    ])
    .with_shortcuts([
        "Press plus and minus to zoom the organization chart.",
        "Press Escape to close the department panel.",
    ])
    .with_common_tasks([
        "Create a new department.",
        "Assign a department manager.",
        "Export the organization chart.",
    ])
}

fn employees() -> GuidanceBundle {
    GuidanceBundle::new(
        "Employees",
        "Welcome to the employee directory. Here you find and manage every employee record.",
        "The search bar and filters are at the top. The employee list fills the main area.",
    )
    .with_actions([
        "Type a name, email or employee number into the search bar to find a person.",
        "Use the department and status filters to narrow the list.",
        "Select an employee to open the profile with personal, job and document details.",
        "Use the add employee button to start the onboarding form.",
    ])
    .with_tips([
        "Switch between grid and list view with the buttons next to the filters.",
        "Inactive employees are hidden unless you change the status filter.",
    ])
    .with_shortcuts([
        "Press slash to jump to the search bar.",
        "Press N to add a new employee.",
    ])
    .with_common_tasks([
        "Add a new employee.",
        "Update contact details.",
        "Upload an employment contract.",
    ])
}

fn recruitment() -> GuidanceBundle {
    GuidanceBundle::new(
        "Recruitment",
        "Welcome to recruitment. Here you manage job openings and follow candidates through hiring.",
        "Open positions are listed on the left. The candidate pipeline for the selected position is on the right.",
    )
    .with_actions([
        "Use the new job opening button to publish a position.",
        "Select a position to see its candidate pipeline.",
        "Move a candidate to the next stage once an interview is done.",
        "Open a candidate card to read the resume and interview notes.",
    ])
    .with_tips([
        "Candidates who have waited more than a week are marked for follow up.",
        "Closing a position archives its pipeline but keeps candidate records.",
    ])
    .with_shortcuts([
        "Press J to create a job opening.",
        "Use the arrow keys to move between pipeline stages.",
    ])
    .with_common_tasks([
        "Publish a job opening.",
        "Schedule an interview.",
        "Send an offer letter.",
    ])
}

fn attendance() -> GuidanceBundle {
    GuidanceBundle::new(
        "Attendance",
        "Welcome to attendance and leave. Here you track working time and manage leave requests.",
        "Today's attendance is at the top. Leave requests and balances are in the tabs below.",
    )
    .with_actions([
        "Use the clock in button to record the start of your working day.",
        "Open the leave requests tab to approve or reject pending requests.",
        "Select an employee to see attendance history and remaining leave balance.",
    ])
    .with_tips([
        "Late arrivals are marked in orange, absences in red.",
        "Approved leave is added to the company calendar automatically.",
    ])
    .with_shortcuts([
        "Press C to clock in or out.",
        "Press L to open leave requests.",
    ])
    .with_common_tasks([
        "Approve a leave request.",
        "Correct a missing clock out.",
        "Export the monthly attendance sheet.",
    ])
}

fn payroll() -> GuidanceBundle {
    GuidanceBundle::new(
        "Payroll",
        "Welcome to payroll. Here you prepare salaries, review payslips and manage deductions.",
        "The current pay period is shown at the top. Payslips for each employee are listed below.",
    )
    .with_actions([
        "Review the pay period summary before running payroll.",
        "Select an employee to check earnings, deductions and net pay.",
        "Use the run payroll button to generate payslips for the period.",
        "Download payslips individually or as one archive.",
    ])
    .with_tips([
        "Payroll can only run once all attendance records of the period are closed.",
        "Changes after a payroll run need a correction entry.",
    ])
    .with_shortcuts([
        "Press R to run payroll for the current period.",
        "Press D to download the selected payslip.",
    ])
    .with_common_tasks([
        "Run monthly payroll.",
        "Add a bonus or deduction.",
        "Download payslips.",
    ])
}

fn performance() -> GuidanceBundle {
    GuidanceBundle::new(
        "Performance",
        "Welcome to performance management. Here you run reviews, set goals and track progress.",
        "Active review cycles are at the top. Goals and feedback for each employee are listed below.",
    )
    .with_actions([
        "Start a review cycle with the new review button.",
        "Select an employee to rate goals and write feedback.",
        "Use the goals tab to add or update objectives.",
    ])
    .with_tips([
        "Ratings are saved as drafts until you submit the review.",
        "Link goals to company objectives to see their impact.",
    ])
    .with_shortcuts([
        "Press G to add a goal.",
        "Press S to submit the current review.",
    ])
    .with_common_tasks([
        "Complete a quarterly review.",
        "Set goals for the next period.",
        "Recommend an employee for promotion.",
    ])
}

fn learning() -> GuidanceBundle {
    GuidanceBundle::new(
        "Learning",
        "Welcome to learning and development. Here you manage courses and track training progress.",
        "The course catalog is in the main area. Enrollments and completion rates are on the right.",
    )
    .with_actions([
        "Browse the course catalog and select a course to see its details.",
        "Use the enroll button to assign a course to employees.",
        "Open the progress tab to follow completion rates.",
    ])
    .with_tips([
        "Mandatory trainings are marked with a badge.",
        "Completed courses appear in the employee profile.",
    ])
    .with_shortcuts(["Press E to enroll the selected employees."])
    .with_common_tasks([
        "Assign a mandatory training.",
        "Add a new course.",
        "Review overdue trainings.",
    ])
}

fn reports() -> GuidanceBundle {
    GuidanceBundle::new(
        "Reports",
        "Welcome to reports. Here you analyze workforce data and export results.",
        "Report categories are listed on the left. The selected report and its filters fill the main area.",
    )
    .with_actions([
        "Choose a report category such as headcount, turnover or payroll costs.",
        "Adjust the date range and department filters.",
        "Use the export button to download the report as a spreadsheet or PDF.",
    ])
    .with_tips([
        "Save frequently used filter combinations as favorites.",
        "Charts update immediately when you change a filter.",
    ])
    .with_shortcuts([
        "Press F to focus the filters.",
        "Press X to export the current report.",
    ])
    .with_common_tasks([
        "Export the monthly headcount report.",
        "Compare turnover between departments.",
        "Review payroll costs per quarter.",
    ])
}

fn helpdesk() -> GuidanceBundle {
    GuidanceBundle::new(
        "Helpdesk",
        "Welcome to the HR helpdesk. Here you raise and answer employee requests.",
        "Open tickets are listed by priority. The selected ticket and its conversation are on the right.",
    )
    .with_actions([
        "Use the new ticket button to raise a request.",
        "Select a ticket to read the conversation and reply.",
        "Change the status to resolved once the request is answered.",
    ])
    .with_tips([
        "High priority tickets stay at the top until they are assigned.",
        "Attach documents directly to a reply.",
    ])
    .with_shortcuts([
        "Press T to create a ticket.",
        "Press R to reply to the selected ticket.",
    ])
    .with_common_tasks([
        "Answer a payroll question.",
        "Assign a ticket to a colleague.",
        "Close resolved tickets.",
    ])
}
