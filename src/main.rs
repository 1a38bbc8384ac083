use clap::Parser;
use label_match_rust::{cli, config, error, export, matcher, normalizer, pipeline, progress, selector, workbook};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use export::ExportOptions;
use matcher::scorer::{char_ratio, pair_cosine_similarity};
use matcher::VectorSpace;
use pipeline::MatchRequest;
use progress::MatchProgress;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = match &cli.command {
        Commands::Config { reset: true, .. } => Config::load_or_default(),
        _ => Config::load()?,
    };

    match cli.command {
        Commands::Match {
            input,
            old_sheet,
            old_column,
            new_sheet,
            new_column,
            old_input,
            distance_threshold,
            score_threshold,
            output,
            format,
            with_scores,
            quiet,
            no_interactive,
        } => {
            println!("🔎 label-match - 新旧リスト照合\n");

            // 1. 入力の確定
            println!("[1/3] 入力を確認中...");
            let interactive = !no_interactive;
            let old_input = old_input.unwrap_or_else(|| input.clone());
            let old_sheet = selector::resolve_sheet(&old_input, old_sheet, "旧リスト", interactive)?;
            let old_column =
                selector::resolve_column(&old_input, &old_sheet, old_column, "旧リスト", interactive)?;
            let new_sheet = selector::resolve_sheet(&input, new_sheet, "新リスト", interactive)?;
            let new_column =
                selector::resolve_column(&input, &new_sheet, new_column, "新リスト", interactive)?;
            println!("✔ 旧リスト: {} / 「{}」", old_sheet, old_column);
            println!("✔ 新リスト: {} / 「{}」\n", new_sheet, new_column);

            let request = MatchRequest {
                old_input,
                old_sheet,
                old_column,
                new_input: input.clone(),
                new_sheet,
                new_column,
                options: config.match_options(distance_threshold, score_threshold),
            };

            // 2. 照合
            println!(
                "[2/3] 照合中... (距離閾値 {}, スコア閾値 {})",
                request.options.thresholds.distance, request.options.thresholds.score
            );
            let progress = MatchProgress::new(quiet);
            let report = pipeline::match_workbook(&request, |done, total| progress.update(done, total))?;
            progress.finish();
            println!(
                "✔ {}件中 {}件一致 / {}件 No Match\n",
                report.summary.total, report.summary.matched, report.summary.no_match
            );

            // 3. 保存
            println!("[3/3] 結果を保存中...");
            let export_options = ExportOptions {
                result_column: config.result_column.clone(),
                with_scores,
            };
            export::export_report(&report, &format, output.as_deref(), &input, &export_options)?;

            println!("\n✅ 照合完了");
        }

        Commands::Inspect { input } => {
            let tables = workbook::read_all_sheets(&input)?;
            println!("📄 {} ({}シート)\n", input.display(), tables.len());
            for table in tables {
                println!("■ {} ({}行)", table.name, table.row_count());
                for header in &table.headers {
                    println!("  - {}", header);
                }
            }
        }

        Commands::Score { old, new } => {
            let options = config.match_options(None, None);
            let old_normalized = normalizer::normalize(&old);
            let new_normalized = normalizer::normalize(&new);

            println!("正規化:");
            println!("  旧: {:?}", old_normalized);
            println!("  新: {:?}", new_normalized);

            match VectorSpace::fit(&[old_normalized.as_str()]) {
                Ok(space) => {
                    let (_, distance) = space.nearest(&new_normalized);
                    let decision = matcher::decide(
                        distance,
                        &old,
                        &new,
                        &options.thresholds,
                        &options.weights,
                    );
                    println!("  コサイン距離: {:.4}", distance);
                    println!("判定: {}", decision.label);
                }
                Err(e) => println!("  コサイン距離: 算出不可 ({})", e),
            }

            println!("ペア類似度:");
            println!("  コサイン類似度: {:.4}", pair_cosine_similarity(&old, &new));
            println!("  文字一致率: {:.2}", char_ratio(&old, &new));
            println!(
                "  複合スコア: {:.4}",
                matcher::combined_similarity_with(&old, &new, &options.weights)
            );
        }

        Commands::Config {
            set_distance_threshold,
            set_score_threshold,
            set_result_column,
            reset,
            show,
        } => {
            let mut config = config;

            if reset {
                config.reset()?;
                println!("✔ 設定を既定値に戻しました");
            }

            if let Some(value) = set_distance_threshold {
                config.set_distance_threshold(value)?;
                println!("✔ 距離閾値を設定しました: {}", value);
            }

            if let Some(value) = set_score_threshold {
                config.set_score_threshold(value)?;
                println!("✔ スコア閾値を設定しました: {}", value);
            }

            if let Some(name) = set_result_column {
                config.set_result_column(name)?;
                println!("✔ 結果列名を設定しました: {}", config.result_column);
            }

            if show {
                println!("設定:");
                println!("  距離閾値: {}", config.distance_threshold);
                println!("  スコア閾値: {}", config.score_threshold);
                println!("  重み (コサイン/文字): {} / {}", config.cosine_weight, config.ratio_weight);
                println!("  結果列名: {}", config.result_column);
                println!("  保存先: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
