use dotenv::dotenv;
use vacancy_stats::headhunter::{HeadHunter, MOSCOW_AREA};
use vacancy_stats::superjob::{SuperJob, MOSCOW_TOWN};
use vacancy_stats::{collect_statistics, render_statistics, SearchConfig};

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();
    let secret_key = std::env::var("SJ_SECRET_KEY").expect("SJ_SECRET_KEY not set");
    let config = SearchConfig::default();

    let superjob = SuperJob::new(&secret_key, MOSCOW_TOWN).expect("Failed to build SuperJob client");
    let superjob_statistics = collect_statistics(&superjob, &config)
        .await
        .expect("Failed to collect SuperJob statistics");

    let headhunter = HeadHunter::new(MOSCOW_AREA).expect("Failed to build HeadHunter client");
    let headhunter_statistics = collect_statistics(&headhunter, &config)
        .await
        .expect("Failed to collect HeadHunter statistics");

    println!("{}", render_statistics("SuperJob Moscow", &superjob_statistics));
    println!();
    println!(
        "{}",
        render_statistics("HeadHunter Moscow", &headhunter_statistics)
    );
}
