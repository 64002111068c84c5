//! `hidori_core`：纯逻辑层，不做任何 I/O、不读时钟、不持有计时器。
//!
//! 设计目标：
//! - **核心可复用**：CLI/GUI/服务端都能复用同一套选日+抽选逻辑
//! - **分层清晰**：session -> processor -> selection / roulette -> 输出（`UiView`）
//! - **副作用走接缝**：随机数（`oracle`）、理由语料（`phrase`）、音效（`feedback`）
//!   都是可替换的协作者，宿主注入实现
pub mod context;
pub mod event;
pub mod feedback;
pub mod model;
pub mod oracle;
pub mod phrase;
pub mod processor;
pub mod roulette;
pub mod selection;
pub mod session;
