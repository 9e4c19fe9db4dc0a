use super::{CategoryId, CategoryValidator};
use crate::aggregate::AggregateRoot;
use crate::clock::{Clock, SystemClock};
use crate::error::DomainResult;
use crate::validation::{ValidationHandler, Validator};
use bon::Builder;
use catalogue_macros::entity;
use chrono::{DateTime, Utc};

/// 分类聚合根
///
/// 不变式：
/// - `active == true` 时 `deleted_at` 为空；`active == false` 时 `deleted_at` 为停用发生的时刻；
/// - `updated_at` 总是最近一次变更的时刻；
/// - `created_at` 创建后不再改变。
///
/// 构造时不做校验，非法状态可以暂时存在；校验需显式调用 `validate`。
/// `builder()` 用于从存储还原已有分类，同样不校验、不打时间戳。
#[entity(id = CategoryId)]
#[derive(Builder)]
pub struct Category {
    name: Option<String>,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    /// 创建新分类：生成新标识，只取一次当前时间
    pub fn new_category(name: Option<String>, description: Option<String>, is_active: bool) -> Self {
        Self::new_category_with(&SystemClock, name, description, is_active)
    }

    pub fn new_category_with<C: Clock + ?Sized>(
        clock: &C,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        let id = CategoryId::unique();
        let now = clock.now();
        let deleted_at = if is_active { None } else { Some(now) };

        tracing::debug!(category_id = %id, active = is_active, "category created");

        Self {
            id,
            name,
            description,
            active: is_active,
            created_at: now,
            updated_at: now,
            deleted_at,
        }
    }

    /// 激活：清除 `deleted_at`；重复调用只刷新 `updated_at`
    pub fn activate(&mut self) -> &mut Self {
        self.activate_with(&SystemClock)
    }

    pub fn activate_with<C: Clock + ?Sized>(&mut self, clock: &C) -> &mut Self {
        self.deleted_at = None;
        self.updated_at = clock.now();
        self.active = true;
        tracing::debug!(category_id = %self.id, "category activated");
        self
    }

    /// 停用：首次停用的时刻会被保留，直到重新激活
    pub fn deactivate(&mut self) -> &mut Self {
        self.deactivate_with(&SystemClock)
    }

    pub fn deactivate_with<C: Clock + ?Sized>(&mut self, clock: &C) -> &mut Self {
        let now = clock.now();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.updated_at = now;
        self.active = false;
        tracing::debug!(category_id = %self.id, "category deactivated");
        self
    }

    /// 替换名称与描述（不校验），再按 `is_active` 激活或停用
    pub fn update(
        &mut self,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> &mut Self {
        self.update_with(&SystemClock, name, description, is_active)
    }

    pub fn update_with<C: Clock + ?Sized>(
        &mut self,
        clock: &C,
        name: Option<String>,
        description: Option<String>,
        is_active: bool,
    ) -> &mut Self {
        self.name = name;
        self.description = description;

        if is_active {
            self.activate_with(clock);
        } else {
            self.deactivate_with(clock);
        }

        self.updated_at = clock.now();
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        self.deleted_at
    }
}

impl AggregateRoot for Category {
    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> DomainResult<()> {
        CategoryValidator::new(self, handler).validate()
    }
}
