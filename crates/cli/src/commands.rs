// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Subcommand, ValueEnum};
use color_eyre::Result;
use giftstock::Projector;
use giftstock_domain::GiftType;
use giftstock_persistence::{Persistence, UploadCategory, UploadTarget};
use serde::Serialize;
use serde_json::{Value, to_value};
use std::path::{Path, PathBuf};
use tracing::info;

/// Which record table an imported sheet lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ImportKind {
    Milestone,
    WelcomeKit,
    Inventory,
}

impl ImportKind {
    /// Builds the upload target. Inventory sheets default their workbook
    /// label to the file stem.
    fn target(
        self,
        path: &Path,
        workbook: Option<String>,
        quarter: Option<String>,
    ) -> UploadTarget {
        match self {
            Self::Milestone => UploadTarget::Milestones,
            Self::WelcomeKit => UploadTarget::WelcomeKits,
            Self::Inventory => UploadTarget::Inventory {
                workbook: workbook.unwrap_or_else(|| {
                    path.file_stem().map_or_else(String::new, |stem| {
                        stem.to_string_lossy().into_owned()
                    })
                }),
                quarter,
            },
        }
    }
}

#[derive(Debug, Serialize)]
struct ImportReport {
    upload_id: i64,
    category: UploadCategory,
    source: String,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Import an exported CSV sheet into the record store
    #[command(visible_alias = "i")]
    Import {
        #[arg(value_enum)]
        kind: ImportKind,

        path: PathBuf,

        /// Inventory workbook label, e.g. `Birthday`
        #[arg(short, long)]
        workbook: Option<String>,

        /// Inventory quarter label, e.g. `Q1`
        #[arg(short, long)]
        quarter: Option<String>,
    },

    /// List stored uploads, newest first
    Uploads,

    /// Count milestones per location for a month
    #[command(visible_alias = "c")]
    Count {
        #[arg(short, long)]
        month: Option<u32>,

        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Show current stock per location and gift type
    Inventory {
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Simulate depletion of one gift type at one location
    #[command(visible_alias = "s")]
    Simulate {
        location: String,

        /// `birthday`, `anniversary` or `service_completion`
        gift_type: GiftType,

        #[arg(long)]
        horizon: Option<u32>,
    },

    /// Project every gift type at one location
    #[command(visible_alias = "p")]
    Project {
        location: String,

        #[arg(long)]
        horizon: Option<u32>,
    },

    /// Project every stocked location and list urgent restocks
    ProjectAll {
        #[arg(long)]
        horizon: Option<u32>,
    },

    /// Stock left at a location once this month is served
    Outlook {
        location: String,

        #[arg(short, long)]
        gift_type: Option<GiftType>,
    },

    /// Inventory rows below the low-stock threshold
    Alerts,

    /// Milestone totals for a month with current low-stock rows
    Summary {
        #[arg(short, long)]
        month: Option<u32>,

        #[arg(short, long)]
        year: Option<i32>,
    },

    /// Subtract a month's milestone usage from stored inventory
    DrawDown {
        #[arg(short, long)]
        month: Option<u32>,

        #[arg(short, long)]
        year: Option<i32>,
    },
}

impl Command {
    /// Runs the command and returns its JSON report.
    pub fn run(self, projector: &mut Projector<Persistence>) -> Result<Value> {
        let report: Value = match self {
            Self::Import {
                kind,
                path,
                workbook,
                quarter,
            } => {
                let target: UploadTarget = kind.target(&path, workbook, quarter);
                let upload_id: i64 = projector.source_mut().import_sheet(&path, &target)?;
                info!(
                    upload_id,
                    path = %path.display(),
                    "Imported sheet"
                );
                to_value(ImportReport {
                    upload_id,
                    category: target.category(),
                    source: path.display().to_string(),
                })?
            }
            Self::Uploads => to_value(projector.source_mut().list_uploads()?)?,
            Self::Count { month, year } => to_value(projector.count_milestones(month, year)?)?,
            Self::Inventory { location } => {
                to_value(projector.current_inventory(location.as_deref())?)?
            }
            Self::Simulate {
                location,
                gift_type,
                horizon,
            } => to_value(projector.simulate(&location, gift_type, horizon, None)?)?,
            Self::Project { location, horizon } => {
                to_value(projector.project_location(&location, horizon)?)?
            }
            Self::ProjectAll { horizon } => to_value(projector.project_all_locations(horizon)?)?,
            Self::Outlook {
                location,
                gift_type,
            } => to_value(projector.next_month_outlook(&location, gift_type)?)?,
            Self::Alerts => to_value(projector.low_stock_alerts()?)?,
            Self::Summary { month, year } => to_value(projector.monthly_summary(month, year)?)?,
            Self::DrawDown { month, year } => {
                to_value(projector.apply_monthly_draw_down(month, year)?)?
            }
        };

        Ok(report)
    }
}
