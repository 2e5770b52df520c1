/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use std::sync::Arc;

use serde::Deserialize;

use crate::{
    registry::{HistoryLog, Registry},
    storage::store::LocationStore,
    tools::logger::LoggerConfig,
};

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub workers: usize,
    pub logger_cfg: LoggerConfig,
    pub request_timeout: u64,
}

/// Shared per-process state handed to every handler.
///
/// The storage handle is opened once here and injected into the registry and
/// the history log; both therefore mutate and read the same transactional
/// tables. The handle is also kept directly so shutdown can close it.
pub struct AppState {
    pub registry: Registry,
    pub history_log: HistoryLog,
    pub store: Arc<LocationStore>,
    pub request_timeout: u64,
}

impl AppState {
    pub fn new(app_config: AppConfig) -> AppState {
        let store = Arc::new(LocationStore::open());

        AppState {
            registry: Registry::new(store.clone()),
            history_log: HistoryLog::new(store.clone()),
            store,
            request_timeout: app_config.request_timeout,
        }
    }
}
