//! 検出コアのエラー
//!
//! コアはI/Oを持たないため、失敗はカスタマイズ提供元などの検出段階からのみ発生する。
//! `detect*` はこのエラーを外へ出さず代替結果に置き換える。

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Detection error: {0}")]
    Detection(String),
}

pub type Result<T> = std::result::Result<T, Error>;
