use bon::Builder;

/// 应用层上下文（Application Context）
///
/// 承载一次分类命令/查询调用的横切信息：
/// - 关联追踪 `correlation_id`：写入处理器的日志事件，串联一次请求；
/// - 执行者 `actor_id`：审计主体，随分类的创建、更新、删除事件一并记录。
///
/// 典型用法：
/// ```rust
/// use catalogue_application::context::AppContext;
///
/// let ctx = AppContext::builder()
///     .correlation_id("cor-123".to_string())
///     .actor_id("u-1".to_string())
///     .build();
/// assert_eq!(ctx.correlation_id(), Some("cor-123"));
/// assert_eq!(ctx.actor_id(), Some("u-1"));
/// ```
#[derive(Builder, Clone, Debug, Default)]
pub struct AppContext {
    correlation_id: Option<String>,
    actor_id: Option<String>,
}

impl AppContext {
    pub fn correlation_id(&self) -> Option<&str> {
        self.correlation_id.as_deref()
    }

    pub fn actor_id(&self) -> Option<&str> {
        self.actor_id.as_deref()
    }
}
