use async_trait::async_trait;

/// 缓存查询结果
///
/// 与 Option 的区别在于区分「键不存在」与「后端暂时不可用/值不可读」，
/// 调用方可以据此决定是否回源。
#[derive(Debug, Clone, PartialEq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    ExistsButNoValue,
}

impl<T> CacheResult<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            CacheResult::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// 对象缓存统一接口
///
/// 所有后端以字符串键值存储，复杂对象由调用方通过 serde_json 编解码。
/// ttl 以秒计，0 表示使用后端的默认 TTL。
#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 声明一个对象缓存插件并在程序启动时注册到全局注册表
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $cache:ident) => {
        ::paste::paste! {
            #[ctor::ctor]
            fn [<__register_object_cache_ $cache:snake>]() {
                $crate::cache::register::register_object_cache_plugin(
                    $name,
                    ::std::sync::Arc::new(|| {
                        ::std::boxed::Box::pin(async {
                            let cache = $cache::new()
                                .map_err($crate::errors::TutorMarketError::cache_connection)?;
                            Ok(::std::boxed::Box::new(cache)
                                as ::std::boxed::Box<dyn $crate::cache::ObjectCache>)
                        }) as $crate::cache::register::BoxedObjectCacheFuture
                    }),
                );
            }
        }
    };
}
