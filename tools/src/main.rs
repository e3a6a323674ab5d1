//! fee-runner: headless runner for the NZ open-banking API fee calculator.
//!
//! Usage:
//!   fee-runner --data-dir ./data --adoption 15 --calls 200
//!   fee-runner --json
//!   fee-runner --ipc-mode

use anyhow::Result;
use apifee_core::{
    assumptions::{AssumptionInputs, AssumptionRanges},
    config::CalcConfig,
    cost_model::{self, CostAnalysisResult},
    projection::{self, BankRevenueResult},
    report,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    SetInput { name: String, value: f64 },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState {
    inputs: AssumptionInputs,
    banks: Vec<BankRevenueResult>,
    total_annual_revenue: f64,
    cost_analysis: CostAnalysisResult,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let json_mode = args.iter().any(|a| a == "--json");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str())
        .unwrap_or("./data");

    let config = if Path::new(&format!("{data_dir}/banks.json")).exists() {
        CalcConfig::load(data_dir)?
    } else {
        log::info!("no data files under {data_dir}; using built-in NZ defaults");
        CalcConfig::default_nz()
    };

    let ranges = AssumptionRanges::default();
    let mut inputs = AssumptionInputs::default();
    inputs.api_calls_per_customer =
        parse_arg(&args, "--calls", inputs.api_calls_per_customer);
    inputs.apps_per_customer = parse_arg(&args, "--apps", inputs.apps_per_customer);
    inputs.pct_customers_using_api =
        parse_arg(&args, "--adoption", inputs.pct_customers_using_api);
    inputs.pct_reaching_cap = parse_arg(&args, "--cap-share", inputs.pct_reaching_cap);
    inputs.payment_initiations_per_customer = parse_arg(
        &args,
        "--initiations",
        inputs.payment_initiations_per_customer,
    );
    let inputs = inputs.clamped(&ranges);

    if ipc_mode {
        run_ipc_loop(&config, &ranges, inputs)?;
    } else if json_mode {
        let state = build_ui_state(&config, &inputs);
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print_report(&config, &inputs);
    }

    Ok(())
}

fn run_ipc_loop(
    config: &CalcConfig,
    ranges: &AssumptionRanges,
    mut inputs: AssumptionInputs,
) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::SetInput { name, value } => {
                if let Err(e) = inputs.set(&name, value) {
                    let err_json = serde_json::json!({ "error": e.to_string() });
                    writeln!(stdout, "{}", err_json)?;
                    stdout.flush()?;
                    continue;
                }
                inputs = inputs.clamped(ranges);
                let state = build_ui_state(config, &inputs);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
            IpcCommand::GetState => {
                let state = build_ui_state(config, &inputs);
                writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
            }
        }
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(config: &CalcConfig, inputs: &AssumptionInputs) -> UiState {
    let banks = projection::project(&config.banks, &config.fees, inputs);
    let total_annual_revenue = projection::total_annual_revenue(&banks);
    let cost_analysis = cost_model::analyze(
        &config.implementation_costs,
        &config.ongoing_costs,
        total_annual_revenue,
        config.profit_benchmark_millions,
    );

    UiState {
        inputs: *inputs,
        banks,
        total_annual_revenue,
        cost_analysis,
    }
}

fn print_report(config: &CalcConfig, inputs: &AssumptionInputs) {
    let banks = projection::project(&config.banks, &config.fees, inputs);
    let total = projection::total_annual_revenue(&banks);
    let analysis = cost_model::analyze(
        &config.implementation_costs,
        &config.ongoing_costs,
        total,
        config.profit_benchmark_millions,
    );

    println!("=== NZ OPEN BANKING API FEE PROJECTION ===");
    println!("  calls/customer/month:  {:.0}", inputs.api_calls_per_customer);
    println!("  apps/customer:         {:.2}", inputs.apps_per_customer);
    println!("  adoption:              {:.0}%", inputs.pct_customers_using_api);
    println!("  hitting cap:           {:.0}%", inputs.pct_reaching_cap);
    println!(
        "  initiations/month:     {:.0}",
        inputs.payment_initiations_per_customer
    );

    let preview = inputs.data_cost_per_customer(&config.fees);
    println!(
        "  data cost/customer:    {}{}",
        report::format_nzd(preview.monthly_cost),
        if preview.capped {
            format!(" (capped at {})", report::format_nzd(config.fees.monthly_cap))
        } else {
            String::new()
        }
    );

    println!();
    println!(
        "  {:<8} {:>12} {:>12} {:>14} {:>14} {:>16}",
        "Bank", "API users", "At cap", "Data API $/mo", "Payments $/mo", "Annual $"
    );
    for bank in &banks {
        println!(
            "  {:<8} {:>12} {:>12} {:>14} {:>14} {:>16}",
            bank.name,
            bank.customers_using_api,
            bank.customers_hitting_cap,
            report::format_nzd(bank.data_api_revenue()),
            report::format_nzd(bank.payment_initiation_revenue),
            report::format_nzd(bank.annual_revenue),
        );
    }
    println!();
    println!("  combined annual revenue: {}", report::format_nzd(total));

    println!();
    println!("=== COST ANALYSIS ===");
    println!(
        "  build cost:        {} - {}",
        report::format_millions(analysis.total_initial_low),
        report::format_millions(analysis.total_initial_high)
    );
    println!(
        "  ongoing cost:      {} - {} / year",
        report::format_millions(analysis.total_ongoing_low),
        report::format_millions(analysis.total_ongoing_high)
    );
    println!(
        "  fee revenue:       {} / year",
        report::format_millions(analysis.revenue_millions)
    );
    println!(
        "  net revenue:       {} - {} / year",
        report::format_millions(analysis.net_annual_revenue_low),
        report::format_millions(analysis.net_annual_revenue_high)
    );
    println!(
        "  break-even:        {} - {} years",
        report::format_years(analysis.years_to_break_even_low),
        report::format_years(analysis.years_to_break_even_high)
    );
    println!(
        "  annual ROI:        {:.0}% - {:.0}%",
        analysis.roi_low, analysis.roi_high
    );
    println!(
        "  share of profits:  {:.1}% - {:.1}%",
        analysis.cost_pct_of_profit_low, analysis.cost_pct_of_profit_high
    );

    println!();
    println!("=== INSIGHTS ===");
    for line in report::insights(&analysis, &config.fees) {
        println!("  {line}");
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
