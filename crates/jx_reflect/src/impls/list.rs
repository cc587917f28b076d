use alloc::collections::VecDeque;
use alloc::vec::Vec;

use crate::Reflect;
use crate::impls::{GenericTypeInfoCell, GenericTypePathCell, concat};
use crate::info::{ListInfo, TypeInfo, TypePath, Typed};
use crate::ops::List;
use crate::reflection::impl_reflect_cast_fn;

macro_rules! impl_reflect_for_list {
    ($ty:ident, $path:literal, $module:literal) => {
        impl<T: TypePath> TypePath for $ty<T> {
            fn type_path() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[$path, "<", T::type_path(), ">"]))
            }

            fn type_name() -> &'static str {
                static CELL: GenericTypePathCell = GenericTypePathCell::new();
                CELL.get_or_insert::<Self>(|| concat(&[stringify!($ty), "<", T::type_name(), ">"]))
            }

            #[inline]
            fn type_ident() -> &'static str {
                stringify!($ty)
            }

            #[inline]
            fn module_path() -> Option<&'static str> {
                Some($module)
            }
        }

        impl<T: Reflect + Typed + Default> Typed for $ty<T> {
            fn type_info() -> &'static TypeInfo {
                static CELL: GenericTypeInfoCell = GenericTypeInfoCell::new();
                CELL.get_or_insert::<Self>(|| TypeInfo::List(ListInfo::new::<Self, T>()))
            }
        }

        impl<T: Reflect + Typed + Default> Reflect for $ty<T> {
            impl_reflect_cast_fn!(List);
        }

        impl<T: Reflect + Typed + Default> List for $ty<T> {
            #[inline]
            fn get(&self, index: usize) -> Option<&dyn Reflect> {
                self.item(index).map(|item| item as &dyn Reflect)
            }

            #[inline]
            fn get_mut(&mut self, index: usize) -> Option<&mut dyn Reflect> {
                self.item_mut(index).map(|item| item as &mut dyn Reflect)
            }

            #[inline]
            fn len(&self) -> usize {
                <$ty<T>>::len(self)
            }

            #[inline]
            fn clear(&mut self) {
                <$ty<T>>::clear(self);
            }

            fn push_default(&mut self) -> &mut dyn Reflect {
                let index = <$ty<T>>::len(self);
                self.push_back_default();
                &mut self[index]
            }
        }
    };
}

/// Storage access shared by the list implementations.
trait ListBacking<T> {
    fn item(&self, index: usize) -> Option<&T>;
    fn item_mut(&mut self, index: usize) -> Option<&mut T>;
    fn push_back_default(&mut self);
}

impl<T: Default> ListBacking<T> for Vec<T> {
    #[inline]
    fn item(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    #[inline]
    fn push_back_default(&mut self) {
        self.push(T::default());
    }
}

impl<T: Default> ListBacking<T> for VecDeque<T> {
    #[inline]
    fn item(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn item_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    #[inline]
    fn push_back_default(&mut self) {
        self.push_back(T::default());
    }
}

impl_reflect_for_list!(Vec, "alloc::vec::Vec", "alloc::vec");
impl_reflect_for_list!(VecDeque, "alloc::collections::VecDeque", "alloc::collections");

#[cfg(test)]
mod tests {
    use alloc::collections::VecDeque;

    use crate::Reflect;
    use crate::info::{TypePath, Typed};
    use crate::ops::List;

    #[test]
    fn push_default_slots() {
        let mut list: VecDeque<String> = VecDeque::new();
        list.push_default()
            .downcast_mut::<String>()
            .unwrap()
            .push_str("x");
        List::push_default(&mut list);
        assert_eq!(list, ["x", ""]);
        assert_eq!(List::len(&list), 2);
    }

    #[test]
    fn list_info() {
        let info = <Vec<u32> as Typed>::type_info().as_list().unwrap();
        assert!(info.item_ty().is::<u32>());
        assert_eq!(Vec::<u32>::type_path(), "alloc::vec::Vec<u32>");
        assert_eq!(
            VecDeque::<bool>::type_name(),
            "VecDeque<bool>"
        );
        let debug = format!("{:?}", &vec![1_u8, 2] as &dyn Reflect);
        assert_eq!(debug, "[1, 2]");
    }
}
