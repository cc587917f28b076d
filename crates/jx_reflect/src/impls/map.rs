use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::hash::BuildHasher;
use std::collections::HashMap;

use jx_utils::hash::hashbrown::HashMap as HashbrownMap;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{MapInfo, TypeInfo, TypePath, Typed};
use crate::ops::Map;
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_map_ops {
    ($map:ty) => {
        #[inline]
        fn get(&self, key: &str) -> Option<&dyn Reflect> {
            <$map>::get(self, key).map(|value| value as &dyn Reflect)
        }

        #[inline]
        fn len(&self) -> usize {
            <$map>::len(self)
        }

        fn iter(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
            Box::new(
                <$map>::iter(self).map(|(key, value)| (key.as_str(), value as &dyn Reflect)),
            )
        }

        #[inline]
        fn clear(&mut self) {
            <$map>::clear(self);
        }

        fn insert_default(&mut self, key: &str) -> &mut dyn Reflect {
            self.entry(String::from(key))
                .and_modify(|value| *value = V::default())
                .or_default()
        }
    };
}

// -----------------------------------------------------------------------------
// BTreeMap

impl<V: TypePath> TypePath for BTreeMap<String, V> {
    fn type_path() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| {
            concat(&["alloc::collections::BTreeMap<alloc::string::String, ", V::type_path(), ">"])
        })
    }

    fn type_name() -> &'static str {
        static CELL: GenericTypePathCell = GenericTypePathCell::new();
        CELL.get_or_insert::<Self>(|| concat(&["BTreeMap<String, ", V::type_name(), ">"]))
    }

    #[inline]
    fn type_ident() -> &'static str {
        "BTreeMap"
    }

    #[inline]
    fn module_path() -> Option<&'static str> {
        Some("alloc::collections")
    }
}

impl<V: Reflect + Typed + Default> Typed for BTreeMap<String, V> {
    fn type_info() -> &'static TypeInfo {
        static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
        CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, V>()))
    }
}

impl<V: Reflect + Typed + Default> Reflect for BTreeMap<String, V> {
    impl_reflect_cast_fn!(Map);
}

impl<V: Reflect + Typed + Default> Map for BTreeMap<String, V> {
    impl_map_ops!(BTreeMap<String, V>);
}

// -----------------------------------------------------------------------------
// HashMap

macro_rules! impl_reflect_for_hash_map {
    ($map:ident, $ident:literal, $path:literal, $module:literal) => {
        impl<V: TypePath, S: 'static> TypePath for $map<String, V, S> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[
                        $path,
                        "<alloc::string::String, ",
                        V::type_path(),
                        ", ",
                        ::core::any::type_name::<S>(),
                        ">",
                    ])
                })
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| {
                    concat(&[$ident, "<String, ", V::type_name(), ">"])
                })
            }

            #[inline]
            fn type_ident() -> &'static str {
                $ident
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<V, S> Typed for $map<String, V, S>
        where
            V: Reflect + Typed + Default,
            S: BuildHasher + Default + Send + Sync + 'static,
        {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::Map(MapInfo::new::<Self, V>()))
            }
        }

        impl<V, S> Reflect for $map<String, V, S>
        where
            V: Reflect + Typed + Default,
            S: BuildHasher + Default + Send + Sync + 'static,
        {
            impl_reflect_cast_fn!(Map);
        }

        impl<V, S> Map for $map<String, V, S>
        where
            V: Reflect + Typed + Default,
            S: BuildHasher + Default + Send + Sync + 'static,
        {
            impl_map_ops!($map<String, V, S>);
        }
    };
}

impl_reflect_for_hash_map!(HashMap, "HashMap", "std::collections::HashMap", "std::collections");
impl_reflect_for_hash_map!(HashbrownMap, "HashMap", "hashbrown::HashMap", "hashbrown");

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use std::collections::HashMap;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::Map;

    #[test]
    fn insert_default_replaces() {
        let mut map: HashMap<String, Vec<u8>> = HashMap::new();
        map.insert("a".into(), vec![1, 2]);
        let slot = map.insert_default("a");
        assert_eq!(slot.downcast_ref::<Vec<u8>>(), Some(&Vec::new()));
        Map::insert_default(&mut map, "b");
        assert_eq!(Map::len(&map), 2);
    }

    #[test]
    fn iter_and_get() {
        let map = BTreeMap::from([("x".to_string(), 1_i32), ("y".to_string(), 2)]);
        let keys: Vec<&str> = Map::iter(&map).map(|(key, _)| key).collect();
        assert_eq!(keys, ["x", "y"]);
        assert_eq!(
            Map::get(&map, "y").and_then(|v| v.downcast_ref::<i32>()),
            Some(&2)
        );
        assert_eq!(
            format!("{:?}", &map as &dyn Reflect),
            "{\"x\": 1, \"y\": 2}"
        );
    }

    #[test]
    fn map_info() {
        let info = <BTreeMap<String, bool> as Typed>::type_info().as_map().unwrap();
        assert!(info.value_ty().is::<bool>());
        assert_eq!(
            BTreeMap::<String, bool>::type_path(),
            "alloc::collections::BTreeMap<alloc::string::String, bool>"
        );
        assert_eq!(HashMap::<String, u8>::type_name(), "HashMap<String, u8>");
    }
}
