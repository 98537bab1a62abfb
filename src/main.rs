#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod fmt;
mod prelude;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    api::Page,
    cli::{Args, Command, book, cancel, timeline},
    core::notifier::LogNotifier,
    prelude::*,
    tables::{build_bookings_table, build_rooms_table},
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let api = args.api.new_client()?;

    match args.command {
        Command::Rooms => {
            let rooms = api.get_rooms().await?;
            println!("{}", build_rooms_table(&rooms));
        }
        Command::Bookings(args) => {
            let bookings = match args.user_id {
                Some(user_id) => api.get_user_bookings(user_id).await?,
                None => {
                    let page = Page::builder().skip(args.skip).limit(args.limit).build();
                    api.get_bookings(page).await?
                }
            };
            println!("{}", build_bookings_table(&bookings));
        }
        Command::Timeline(args) => {
            timeline(&args, &api, &args.view.clock()).await?;
        }
        Command::Book(args) => {
            if let Some(booking) = book(&args, &api, &args.view.clock(), &LogNotifier).await? {
                println!("{}", build_bookings_table(&[booking]));
            }
        }
        Command::Cancel(args) => {
            cancel(&args, &api).await?;
        }
    }

    info!("done!");
    Ok(())
}
