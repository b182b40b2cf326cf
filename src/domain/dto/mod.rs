//! 데이터 전송 객체 (DTO)
//!
//! HTTP 요청 본문과 응답 본문의 형태를 정의합니다.
//! 응답은 모두 `success` 필드를 포함합니다.

pub mod drinks;
