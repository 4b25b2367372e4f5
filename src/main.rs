//! Property Finance CLI
//!
//! Command-line interface for the purchase, mortgage, service charge and
//! rent-vs-buy calculators. Pass --json for machine-readable output.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

use property_finance::analysis::YearlySnapshot;
use property_finance::checklist::{BuyerProfile, BuyerType, ResidenceStatus};
use property_finance::loan::Installment;
use property_finance::property::{load_properties, DEFAULT_PROPERTIES_PATH};
use property_finance::{
    AmortizationSchedule, Calculator, ComparisonResult, CostBreakdownResult, DocumentChecklist,
    LoanResult, PropertyType, RentVsBuyAnalysisResult, RentVsBuyParams, ServiceChargeResult,
};

#[derive(Parser, Debug)]
#[command(
    name = "property-finance",
    about = "Purchase costs, mortgages, service charges and rent-vs-buy analysis",
    version
)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Directory containing community_rates.csv (built-in rates if omitted)
    #[arg(long, global = true)]
    rates: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Monthly payment, interest and installment splits for a mortgage
    Loan(LoanArgs),
    /// Full month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// One-time acquisition costs
    Costs(CostsArgs),
    /// Annual and monthly community service charges
    ServiceCharge(ServiceChargeArgs),
    /// Compare the appreciation outlook of two purchase prices
    Compare(CompareArgs),
    /// NPV comparison of buying against renting
    RentVsBuy(RentVsBuyArgs),
    /// Month-by-month net worth analysis of buying against renting
    Analyze(AnalyzeArgs),
    /// Documents needed to complete a purchase
    Checklist(ChecklistArgs),
}

#[derive(Args, Debug)]
struct LoanArgs {
    #[arg(long)]
    price: f64,
    #[arg(long)]
    down_payment: f64,
    /// Annual interest rate in percent
    #[arg(long)]
    rate: f64,
    /// Tenure in years
    #[arg(long)]
    years: u32,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    #[command(flatten)]
    loan: LoanArgs,
    /// Print every installment instead of the first and last year
    #[arg(long)]
    all: bool,
}

#[derive(Args, Debug)]
struct CostsArgs {
    #[arg(long)]
    price: f64,
    #[arg(long, default_value_t = 0.0)]
    mortgage: f64,
    #[arg(long, default_value_t = 0.0)]
    life_insurance: f64,
    #[arg(long, default_value_t = 0.0)]
    maintenance_deposit: f64,
    #[arg(long, default_value_t = 0.0)]
    utility_fees: f64,
    #[arg(long, default_value_t = 0.0)]
    moving_costs: f64,
}

#[derive(Args, Debug)]
struct ServiceChargeArgs {
    /// Look up community, type and size from the properties file
    #[arg(long, conflicts_with_all = ["community", "property_type", "size"])]
    property_id: Option<u64>,
    /// Properties CSV used with --property-id
    #[arg(long, default_value = DEFAULT_PROPERTIES_PATH)]
    properties: PathBuf,
    #[arg(long)]
    community: Option<String>,
    /// Apartment, Villa, Townhouse or any other label
    #[arg(long = "type")]
    property_type: Option<String>,
    /// Size in square feet
    #[arg(long)]
    size: Option<f64>,
    /// List the reference estimates for --community instead
    #[arg(long, requires = "community")]
    reference: bool,
}

#[derive(Args, Debug)]
struct CompareArgs {
    #[arg(long)]
    price1: f64,
    #[arg(long)]
    price2: f64,
    /// Annual appreciation in percent
    #[arg(long)]
    appreciation: f64,
    #[arg(long)]
    years: u32,
}

#[derive(Args, Debug)]
struct RentVsBuyArgs {
    #[arg(long)]
    price: f64,
    #[arg(long)]
    rent: f64,
    /// Annual rent increase in percent
    #[arg(long, default_value_t = 0.0)]
    rent_increase: f64,
    /// Discount (investment return) rate in percent
    #[arg(long)]
    discount_rate: f64,
    #[arg(long, default_value_t = 0.0)]
    appreciation: f64,
    #[arg(long)]
    years: u32,
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    #[arg(long)]
    price: f64,
    #[arg(long)]
    down_payment: f64,
    #[arg(long)]
    rate: f64,
    #[arg(long)]
    loan_years: u32,
    #[arg(long, default_value_t = 0.0)]
    appreciation: f64,
    /// Annual maintenance cost
    #[arg(long, default_value_t = 0.0)]
    maintenance: f64,
    /// Annual property tax
    #[arg(long, default_value_t = 0.0)]
    property_tax: f64,
    #[arg(long)]
    rent: f64,
    #[arg(long, default_value_t = 0.0)]
    rent_increase: f64,
    #[arg(long, default_value_t = 0.0)]
    security_deposit: f64,
    #[arg(long, default_value_t = 0.0)]
    investment_return: f64,
    #[arg(long)]
    years: u32,
    /// Also print the year-by-year projection
    #[arg(long)]
    projection: bool,
}

impl AnalyzeArgs {
    fn params(&self) -> RentVsBuyParams {
        RentVsBuyParams {
            price: self.price,
            down_payment: self.down_payment,
            interest_rate: self.rate,
            loan_tenure_years: self.loan_years,
            appreciation_rate: self.appreciation,
            maintenance_cost: self.maintenance,
            property_tax: self.property_tax,
            monthly_rent: self.rent,
            rent_increase_rate: self.rent_increase,
            security_deposit: self.security_deposit,
            investment_return_rate: self.investment_return,
            analysis_period_years: self.years,
        }
    }
}

#[derive(Args, Debug)]
struct ChecklistArgs {
    /// salaried, self_employed, investor or other
    #[arg(long, default_value = "salaried")]
    buyer_type: String,
    #[arg(long)]
    nationality: String,
    /// uae-resident, non-resident or other
    #[arg(long, default_value = "uae-resident")]
    residence: String,
    #[arg(long)]
    bank: Option<String>,
    #[arg(long)]
    mortgage: bool,
    #[arg(long)]
    off_plan: bool,
    #[arg(long)]
    ready: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let calc = match &cli.rates {
        Some(dir) => Calculator::from_csv_path(dir)
            .with_context(|| format!("loading community rates from {}", dir.display()))?,
        None => Calculator::new(),
    };

    match cli.command {
        Command::Loan(args) => {
            let loan = calc.compute_loan(args.price, args.down_payment, args.rate, args.years)?;
            emit(cli.json, &loan, print_loan)
        }
        Command::Schedule(args) => {
            let l = &args.loan;
            let schedule = calc.loan_schedule(l.price, l.down_payment, l.rate, l.years)?;
            emit(cli.json, &schedule, |s| print_schedule(s, args.all))
        }
        Command::Costs(args) => {
            let costs = calc.compute_cost_breakdown(
                args.price,
                args.mortgage,
                args.life_insurance,
                args.maintenance_deposit,
                args.utility_fees,
                args.moving_costs,
            )?;
            emit(cli.json, &costs, print_costs)
        }
        Command::ServiceCharge(args) => run_service_charge(&calc, args, cli.json),
        Command::Compare(args) => {
            let result =
                calc.compare_properties(args.price1, args.price2, args.appreciation, args.years)?;
            emit(cli.json, &result, print_comparison)
        }
        Command::RentVsBuy(args) => {
            let result = calc.compare_rent_vs_buy(
                args.price,
                args.rent,
                args.rent_increase,
                args.discount_rate,
                args.appreciation,
                args.years,
            )?;
            emit(cli.json, &result, print_comparison)
        }
        Command::Analyze(args) => {
            let params = args.params();
            let result = calc.analyze_rent_vs_buy(&params)?;
            if args.projection {
                let projection = calc.rent_vs_buy_projection(&params)?;
                let report = AnalysisReport { result, projection };
                emit(cli.json, &report, |r| {
                    print_analysis(&r.result);
                    print_projection(&r.projection);
                })
            } else {
                emit(cli.json, &result, print_analysis)
            }
        }
        Command::Checklist(args) => {
            let buyer = BuyerProfile {
                buyer_type: args.buyer_type.parse::<BuyerType>()?,
                nationality: args.nationality,
                residence_status: args.residence.parse::<ResidenceStatus>()?,
                selected_bank: args.bank,
                mortgage_required: args.mortgage,
                off_plan: args.off_plan,
                ready: args.ready,
            };
            let checklist = calc.document_checklist(&buyer);
            emit(cli.json, &checklist, print_checklist)
        }
    }
}

#[derive(Serialize)]
struct AnalysisReport {
    result: RentVsBuyAnalysisResult,
    projection: Vec<YearlySnapshot>,
}

fn run_service_charge(calc: &Calculator, args: ServiceChargeArgs, json: bool) -> Result<()> {
    if args.reference {
        let community = args.community.as_deref().unwrap_or_default();
        let rows = calc.reference_estimates_for(community);
        if rows.is_empty() {
            bail!("no reference rates for community {:?}", community);
        }
        return emit(json, &rows, |rows| {
            for r in rows {
                print_service_charge(r);
                println!();
            }
        });
    }

    let result = match args.property_id {
        Some(id) => {
            let catalog = load_properties(&args.properties)
                .with_context(|| format!("loading properties from {}", args.properties.display()))?;
            calc.service_charge_by_id(&catalog, id)?
        }
        None => {
            let (Some(community), Some(ty), Some(size)) = (args.community, args.property_type, args.size)
            else {
                bail!("either --property-id or all of --community, --type and --size are required");
            };
            calc.estimate_service_charge(&community, &PropertyType::parse(&ty), size)?
        }
    };
    emit(json, &result, print_service_charge)
}

/// Print as JSON or through the text formatter
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce(&T)) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text(value);
    }
    Ok(())
}

fn print_loan(loan: &LoanResult) {
    println!("Loan");
    println!("{}", "=".repeat(40));
    println!("  Price:              {:>16.2}", loan.price);
    println!("  Down payment:       {:>16.2}", loan.down_payment);
    println!("  Loan amount:        {:>16.2}", loan.loan_amount);
    println!("  LTV:                {:>15.2}%", loan.loan_to_value_ratio);
    println!("  Rate / tenure:      {:>9.3}% / {}y", loan.interest_rate, loan.tenure_years);
    println!();
    println!("  Monthly payment:    {:>16.2}", loan.monthly_payment);
    println!("  Installments:       {:>16}", loan.number_of_installments);
    println!("  Total payable:      {:>16.2}", loan.total_payable);
    println!("  Total interest:     {:>16.2}", loan.total_interest);
    println!();
    println!(
        "  First installment:  principal {:.2}, interest {:.2}",
        loan.first_installment_principal, loan.first_installment_interest
    );
    println!(
        "  Last installment:   principal {:.2}, interest {:.2}",
        loan.last_installment_principal, loan.last_installment_interest
    );
}

fn print_schedule(schedule: &AmortizationSchedule, all: bool) {
    println!(
        "Amortization of {:.2} at {:.2}/month ({} installments)",
        schedule.loan_amount,
        schedule.payment,
        schedule.len()
    );
    println!("{:>5} {:>14} {:>14} {:>14} {:>16}", "No", "Payment", "Principal", "Interest", "Balance");
    println!("{}", "-".repeat(68));

    let rows = schedule.installments();
    let print_row = |i: &Installment| {
        println!(
            "{:>5} {:>14.2} {:>14.2} {:>14.2} {:>16.2}",
            i.number, i.payment, i.principal, i.interest, i.closing_balance
        );
    };

    if all || rows.len() <= 24 {
        rows.iter().for_each(print_row);
    } else {
        rows[..12].iter().for_each(print_row);
        println!("  ... ({} more installments)", rows.len() - 24);
        rows[rows.len() - 12..].iter().for_each(print_row);
    }

    println!("{}", "-".repeat(68));
    println!(
        "Total principal {:.2}, total interest {:.2}, residual {:.6}",
        schedule.total_principal(),
        schedule.total_interest(),
        schedule.residual_balance()
    );
}

fn print_costs(c: &CostBreakdownResult) {
    println!("Acquisition costs");
    println!("{}", "=".repeat(44));
    for (label, value) in [
        ("Price", c.price),
        ("DLD fee", c.dld_fee),
        ("Agency fee", c.agency_fee),
        ("Registration fee", c.registration_fee),
        ("Mortgage registration", c.mortgage_registration_fee),
        ("Valuation fee", c.valuation_fee),
        ("Mortgage processing", c.mortgage_processing_fee),
        ("Property insurance", c.property_insurance_cost),
        ("Life insurance", c.life_insurance_cost),
        ("Maintenance deposit", c.maintenance_deposit),
        ("Utility connections", c.utility_connection_fees),
        ("Moving costs", c.moving_costs),
    ] {
        println!("  {:<24}{:>16.2}", label, value);
    }
    println!("{}", "-".repeat(44));
    println!("  {:<24}{:>16.2}", "Total cost", c.total_cost);
    println!("  {:<24}{:>16.2}", "Of which fees", c.total_fees());
}

fn print_service_charge(r: &ServiceChargeResult) {
    println!("{} {} ({} sq ft)", r.community_name, r.property_type, r.property_size);
    println!(
        "  Rates: {:.2}/sq ft service, {:.2}/sq ft cooling",
        r.service_charge_rate_per_sqft, r.cooling_rate_per_sqft
    );
    for (label, value) in [
        ("Service charge", r.annual_service_charge),
        ("Cooling", r.cooling_charges),
        ("Building maintenance", r.building_maintenance_fee),
        ("Security", r.security_fee),
        ("Cleaning", r.cleaning_fee),
        ("Parking", r.parking_fee),
        ("Gym and pool", r.gym_and_pool_fee),
        ("Miscellaneous", r.misc_charges),
    ] {
        println!("  {:<24}{:>14.2}", label, value);
    }
    println!("  {:<24}{:>14.2}", "Total per year", r.total_annual_charges);
    println!("  {:<24}{:>14.2}", "Per month", r.monthly_charges);
}

fn print_comparison(result: &ComparisonResult) {
    match result {
        ComparisonResult::PropertyVsProperty(c) => {
            println!(
                "Property comparison over {} years at {:.2}% appreciation",
                c.holding_years, c.appreciation_rate
            );
            println!("{:<14} {:>16} {:>16}", "", "Property 1", "Property 2");
            println!("{:<14} {:>16.2} {:>16.2}", "Price", c.price1, c.price2);
            println!(
                "{:<14} {:>16.2} {:>16.2}",
                "Future value", c.property1_future_value, c.property2_future_value
            );
            println!("{:<14} {:>15.2}% {:>15.2}%", "ROI", c.property1_roi, c.property2_roi);
            println!(
                "{:<14} {:>16.2} {:>16.2}",
                "Total cost", c.property1_total_cost, c.property2_total_cost
            );
        }
        ComparisonResult::RentVsBuy(c) => {
            println!("Rent vs buy over {} years", c.holding_years);
            println!("  Buying NPV:        {:>16.2}", c.buying_npv);
            println!("  Renting NPV:       {:>16.2}", c.renting_npv);
            println!("  Break-even:        {:>13} yrs", c.break_even_years);
            println!("  Cost of ownership: {:>16.2}", c.total_cost_of_ownership);
            println!(
                "  {} looks better",
                if c.is_buying_better() { "Buying" } else { "Renting" }
            );
        }
    }
}

fn print_analysis(r: &RentVsBuyAnalysisResult) {
    println!("Rent vs buy analysis over {} years", r.analysis_period_years);
    println!("{}", "=".repeat(48));
    println!("  Monthly mortgage payment: {:>16.2}", r.monthly_mortgage_payment);
    println!("  Total cost of buying:     {:>16.2}", r.total_cost_of_buying);
    println!("  Property value at end:    {:>16.2}", r.property_value_at_end);
    println!("  Remaining balance:        {:>16.2}", r.remaining_mortgage_balance);
    println!("  Net worth (buying):       {:>16.2}", r.net_worth_after_buying);
    println!("  Total cost of renting:    {:>16.2}", r.total_cost_of_renting);
    println!("  Net worth (renting):      {:>16.2}", r.net_worth_after_renting);
    match r.break_even_year() {
        Some(year) => println!("  Break-even:               {:>12} yrs", year),
        None => println!("  Break-even:               {:>16}", "never"),
    }
    println!(
        "  {} comes out ahead by {:.2}",
        if r.is_buying_better { "Buying" } else { "Renting" },
        r.buying_advantage().abs()
    );
}

fn print_projection(projection: &[YearlySnapshot]) {
    println!();
    println!(
        "{:>4} {:>16} {:>16} {:>16} {:>16}",
        "Year", "Property", "Balance", "Buying", "Renting"
    );
    println!("{}", "-".repeat(72));
    for s in projection {
        println!(
            "{:>4} {:>16.2} {:>16.2} {:>16.2} {:>16.2}",
            s.year, s.property_value, s.remaining_balance, s.net_worth_buying, s.investment_value
        );
    }
}

fn print_checklist(checklist: &DocumentChecklist) {
    for (title, docs) in [
        ("Identity", &checklist.identity_documents),
        ("Income proof", &checklist.income_proof_documents),
        ("Property", &checklist.property_documents),
        ("Bank", &checklist.bank_documents),
        ("Visa and residency", &checklist.visa_documents),
        ("Additional", &checklist.additional_documents),
    ] {
        if docs.is_empty() {
            continue;
        }
        println!("{}:", title);
        for doc in docs {
            println!("  [ ] {}", doc);
        }
        println!();
    }
    println!("{}", checklist.notes);
}
