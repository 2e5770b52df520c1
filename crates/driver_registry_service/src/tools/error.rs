/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/

use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use serde::{Deserialize, Serialize};

use crate::storage::error::StorageError;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    error_message: String,
    pub error_code: String,
}

// Display doubles as the machine-readable code; message() carries the
// human-readable detail.
#[derive(Debug, Serialize, thiserror::Error)]
pub enum AppError {
    #[error("INTERNAL_ERROR")]
    InternalError(String),
    #[error("INVALID_REQUEST")]
    InvalidRequest(String),
    #[error("UNPROCESSIBLE_REQUEST")]
    UnprocessibleRequest(String),
    #[error("DRIVER_NOT_FOUND")]
    DriverNotFound(String),
    #[error("STORAGE_FAILURE")]
    StorageFailure(String),
    #[error("REQUEST_TIMEOUT")]
    RequestTimeout,
}

impl AppError {
    fn error_body(&self) -> ErrorBody {
        ErrorBody {
            error_message: self.message(),
            error_code: self.code(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            AppError::InternalError(err) => err.to_string(),
            AppError::InvalidRequest(err) => err.to_string(),
            AppError::UnprocessibleRequest(err) => err.to_string(),
            AppError::DriverNotFound(driver_id) => {
                format!("Driver not found : {driver_id}")
            }
            AppError::StorageFailure(reason) => {
                format!("Storage failure : {reason}")
            }
            AppError::RequestTimeout => "Request timed out".to_string(),
        }
    }

    pub fn code(&self) -> String {
        self.to_string()
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(self.error_body())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UnprocessibleRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DriverNotFound(_) => StatusCode::NOT_FOUND,
            AppError::StorageFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

impl From<StorageError> for AppError {
    fn from(error: StorageError) -> Self {
        AppError::StorageFailure(error.to_string())
    }
}
