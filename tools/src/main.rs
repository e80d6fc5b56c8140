//! hub-runner: headless evaluation runner for Retention Hub.
//!
//! Usage:
//!   hub-runner --cohort telecom --seed 42 --customer telecom-0007 --discount 25
//!   hub-runner --ipc-mode

use anyhow::Result;
use retention_core::{
    config::{FormulaVariant, HubConfig},
    roster::CustomerProfile,
    selection::Selection,
    session::{Evaluation, EvaluationSession},
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    LoadCohort { cohort: String, seed: u64 },
    Select { customer_id: String },
    SetDiscount { pct: f64 },
    SetVariant { variant: FormulaVariant },
    Evaluate,
    Quit,
}

#[derive(serde::Serialize)]
struct RosterRow {
    customer_id: String,
    display_name: String,
    plan_tier: String,
    tenure_months: u32,
    monthly_value: f64,
    has_priority_support: bool,
    risk_display: String,
}

#[derive(serde::Serialize)]
struct UiState {
    session_id: String,
    cohort: String,
    variant: FormulaVariant,
    discount_pct: f64,
    selection: Selection,
    roster: Vec<RosterRow>,
    last_evaluation: Option<Evaluation>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let seed = parse_arg(&args, "--seed", 42u64);
    let discount = parse_arg(&args, "--discount", 0.0f64);
    let cohort = parse_str_arg(&args, "--cohort").unwrap_or("telecom");
    let customer = parse_str_arg(&args, "--customer");
    let variant_name = parse_str_arg(&args, "--variant").unwrap_or("contract");
    let data_dir = parse_str_arg(&args, "--data-dir").unwrap_or("./data");

    let config = HubConfig::load(data_dir)?;
    let mut session = EvaluationSession::new(config);

    match variant_name {
        "contract" => session.set_variant(FormulaVariant::Contract),
        "plan" => session.set_variant(FormulaVariant::Plan),
        other => anyhow::bail!("Unknown variant '{other}' (expected 'contract' or 'plan')"),
    }

    if ipc_mode {
        return run_ipc_loop(&mut session);
    }

    println!("Retention Hub — hub-runner");
    println!("  started:  {}", chrono::Utc::now().to_rfc3339());
    println!("  cohort:   {cohort}");
    println!("  seed:     {seed}");
    println!("  variant:  {variant_name}");
    println!("  discount: {discount}%");
    println!();

    session.load_cohort(cohort, seed)?;
    if let Some(id) = customer {
        session.select(id);
    }
    session.set_discount(discount)?;

    print_summary(&session)
}

fn run_ipc_loop(session: &mut EvaluationSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();
    let mut last_evaluation = None;

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("ipc: rejected malformed command: {e}");
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {}
            IpcCommand::LoadCohort { cohort, seed } => {
                if let Err(e) = session.load_cohort(&cohort, seed) {
                    write_error(&mut stdout, &e.to_string())?;
                    continue;
                }
                last_evaluation = None;
            }
            IpcCommand::Select { customer_id } => {
                session.select(&customer_id);
                last_evaluation = None;
            }
            IpcCommand::SetDiscount { pct } => {
                if let Err(e) = session.set_discount(pct) {
                    write_error(&mut stdout, &e.to_string())?;
                    continue;
                }
            }
            IpcCommand::SetVariant { variant } => {
                session.set_variant(variant);
                last_evaluation = None;
            }
            IpcCommand::Evaluate => {
                last_evaluation = session.evaluate()?;
            }
        }

        let state = build_ui_state(session, last_evaluation.clone());
        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{}", err_json)?;
    stdout.flush()?;
    Ok(())
}

fn build_ui_state(session: &EvaluationSession, last_evaluation: Option<Evaluation>) -> UiState {
    UiState {
        session_id: session.session_id().to_string(),
        cohort: session.snapshot().cohort_id.clone(),
        variant: session.variant(),
        discount_pct: session.discount_pct(),
        selection: session.selection().clone(),
        roster: session.snapshot().customers().iter().map(roster_row).collect(),
        last_evaluation,
    }
}

fn roster_row(profile: &CustomerProfile) -> RosterRow {
    RosterRow {
        customer_id: profile.customer_id.clone(),
        display_name: profile.display_name.clone(),
        plan_tier: profile.plan_tier.clone(),
        tenure_months: profile.tenure_months,
        monthly_value: profile.monthly_value,
        has_priority_support: profile.has_priority_support,
        risk_display: profile.risk_display.clone(),
    }
}

fn print_summary(session: &EvaluationSession) -> Result<()> {
    let Some(eval) = session.evaluate()? else {
        println!("(Cohort is empty — nothing to evaluate)");
        return Ok(());
    };

    let profile = session
        .snapshot()
        .get(&eval.customer_id)
        .ok_or_else(|| anyhow::anyhow!("Evaluated customer missing from snapshot"))?;

    println!("=== EVALUATION ===");
    println!("  customer:        {} ({})", profile.customer_id, profile.display_name);
    println!("  plan tier:       {}", profile.plan_tier);
    println!("  tenure:          {} months", profile.tenure_months);
    println!("  monthly value:   ${:.2}", profile.monthly_value);
    println!("  priority support: {}", if profile.has_priority_support { "yes" } else { "no" });
    println!();
    println!("  formula:         {}", eval.variant.name());
    println!("  base risk:       {:.1}%", eval.score.risk);
    println!("  with discount:   {:.1}% (at {:.0}% off)", eval.simulated_risk, eval.discount_pct);
    println!("  revenue at risk: ${:.2}", eval.revenue.baseline_revenue_at_risk);
    println!("  safeguarded:     ${:.2}", eval.revenue.revenue_safeguarded);
    println!();
    println!("=== STRATEGY ===");
    println!("  {}", eval.strategy.headline);
    println!("  {}", eval.strategy.action);
    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn parse_str_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
