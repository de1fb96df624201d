//! The standard-library shape the well-known catalog is resolved against.

use wk_ir::{Name, PackagePath, StringInterner};

use super::StdlibModel;
use crate::{PrimitiveKind, Type};

/// Dotted package paths of the standard library.
pub mod packages {
    pub const STD: &str = "std";
    pub const COLLECTIONS: &str = "std.collections";
    pub const TEXT: &str = "std.text";
    pub const RANGES: &str = "std.ranges";
    pub const INTERNAL: &str = "std.internal";
    pub const REFLECT: &str = "std.internal.reflect";
}

const ARITHMETIC: [&str; 5] = ["plus", "minus", "times", "div", "rem"];
const BITWISE: [&str; 3] = ["and", "or", "xor"];
const SHIFTS: [&str; 3] = ["shl", "shr", "ushr"];
const NUMERIC_UNARY: [&str; 4] = ["unaryMinus", "unaryPlus", "inc", "dec"];

struct Builder<'a> {
    model: StdlibModel,
    interner: &'a StringInterner,
    std: PackagePath,
}

impl Builder<'_> {
    fn name(&self, s: &str) -> Name {
        self.interner.intern(s)
    }

    fn package(&self, dotted: &str) -> PackagePath {
        PackagePath::parse(dotted, self.interner)
    }

    fn std_type(&self, name: &str) -> Type {
        Type::class(self.std.clone(), self.name(name))
    }

    fn class(&mut self, package: &PackagePath, name: &str, type_params: &[&str]) -> Type {
        let name = self.name(name);
        let params = type_params.iter().map(|p| self.name(p)).collect();
        let decl = self.model.add_class(package, name, params);
        decl.as_class()
            .map_or_else(|| Type::class(package.clone(), name), |c| c.default_type.clone())
    }

    fn function(&mut self, package: &PackagePath, name: &str, params: Vec<Type>, ret: Type) {
        let name = self.name(name);
        self.model.add_function(package, name, params, ret);
    }

    fn member(&mut self, owner: &Type, name: &str, params: Vec<Type>, ret: Type) {
        let name = self.name(name);
        self.model.add_member(owner, name, params, ret);
    }
}

/// Widened result kind of a binary arithmetic operator.
fn arithmetic_result(lhs: PrimitiveKind, rhs: PrimitiveKind) -> PrimitiveKind {
    use PrimitiveKind::{Double, Float, Int, Long};
    if lhs == Double || rhs == Double {
        Double
    } else if lhs == Float || rhs == Float {
        Float
    } else if lhs == Long || rhs == Long {
        Long
    } else {
        Int
    }
}

pub(super) fn build(interner: &StringInterner) -> StdlibModel {
    let mut b = Builder {
        model: StdlibModel::new(),
        interner,
        std: PackagePath::parse(packages::STD, interner),
    };

    core_classes(&mut b);
    primitives(&mut b);
    arrays(&mut b);
    collections_and_text(&mut b);
    progressions(&mut b);
    internal(&mut b);
    reflection(&mut b);

    b.model
}

fn core_classes(b: &mut Builder<'_>) {
    let std_pkg = b.std.clone();
    let any = b.class(&std_pkg, "Any", &[]);
    let unit = b.class(&std_pkg, "Unit", &[]);
    b.class(&std_pkg, "Nothing", &[]);
    let string = b.class(&std_pkg, "String", &[]);
    b.class(&std_pkg, "Throwable", &[]);

    b.member(&any, "equals", vec![any.clone()], Type::BOOLEAN);
    b.member(&any, "hashCode", Vec::new(), Type::INT);
    b.member(&any, "toString", Vec::new(), string);

    let lazy_message = Type::generic(std_pkg.clone(), b.name("Function0"), vec![any]);
    b.function(&std_pkg, "assert", vec![Type::BOOLEAN], unit.clone());
    b.function(&std_pkg, "assert", vec![Type::BOOLEAN, lazy_message], unit);
}

fn primitives(b: &mut Builder<'_>) {
    let std_pkg = b.std.clone();
    for kind in PrimitiveKind::ALL {
        let name = b.name(kind.name());
        b.model
            .add_class_with_type(&std_pkg, name, Vec::new(), Type::Primitive(kind));
    }

    for receiver in PrimitiveKind::NUMERIC {
        let owner = Type::Primitive(receiver);
        for op in ARITHMETIC {
            for arg in PrimitiveKind::NUMERIC {
                let ret = Type::Primitive(arithmetic_result(receiver, arg));
                b.member(&owner, op, vec![Type::Primitive(arg)], ret);
            }
        }
        for arg in PrimitiveKind::NUMERIC {
            b.member(&owner, "compareTo", vec![Type::Primitive(arg)], Type::INT);
        }
        for op in NUMERIC_UNARY {
            let ret = if op == "inc" || op == "dec" {
                owner.clone()
            } else {
                Type::Primitive(arithmetic_result(receiver, PrimitiveKind::Int))
            };
            b.member(&owner, op, Vec::new(), ret);
        }
    }

    for receiver in [PrimitiveKind::Int, PrimitiveKind::Long] {
        let owner = Type::Primitive(receiver);
        for op in BITWISE {
            b.member(&owner, op, vec![owner.clone()], owner.clone());
        }
        for op in SHIFTS {
            b.member(&owner, op, vec![Type::INT], owner.clone());
        }
        b.member(&owner, "inv", Vec::new(), owner.clone());
    }

    let char_ty = Type::CHAR;
    b.member(&char_ty, "plus", vec![Type::INT], Type::CHAR);
    b.member(&char_ty, "minus", vec![Type::CHAR], Type::INT);
    b.member(&char_ty, "minus", vec![Type::INT], Type::CHAR);
    b.member(&char_ty, "compareTo", vec![Type::CHAR], Type::INT);
    b.member(&char_ty, "inc", Vec::new(), Type::CHAR);
    b.member(&char_ty, "dec", Vec::new(), Type::CHAR);

    let boolean = Type::BOOLEAN;
    for op in BITWISE {
        b.member(&boolean, op, vec![Type::BOOLEAN], Type::BOOLEAN);
    }
    b.member(&boolean, "not", Vec::new(), Type::BOOLEAN);
    b.member(&boolean, "compareTo", vec![Type::BOOLEAN], Type::INT);
}

fn arrays(b: &mut Builder<'_>) {
    let std_pkg = b.std.clone();
    let unit = b.std_type("Unit");

    let array = b.class(&std_pkg, "Array", &["T"]);
    let element = Type::Param(b.name("T"));
    b.member(&array, "get", vec![Type::INT], element.clone());
    b.member(&array, "set", vec![Type::INT, element], unit.clone());
    b.member(&array, "size", Vec::new(), Type::INT);

    for kind in PrimitiveKind::ALL {
        let name = b.name(kind.array_name());
        let owner = Type::PrimitiveArray(kind);
        b.model
            .add_class_with_type(&std_pkg, name, Vec::new(), owner.clone());
        b.member(&owner, "get", vec![Type::INT], Type::Primitive(kind));
        b.member(&owner, "set", vec![Type::INT, Type::Primitive(kind)], unit.clone());
        b.member(&owner, "size", Vec::new(), Type::INT);
    }
}

fn collections_and_text(b: &mut Builder<'_>) {
    let collections = b.package(packages::COLLECTIONS);
    let iterator = b.class(&collections, "Iterator", &["T"]);
    let element = Type::Param(b.name("T"));
    b.member(&iterator, "hasNext", Vec::new(), Type::BOOLEAN);
    b.member(&iterator, "next", Vec::new(), element);

    let text = b.package(packages::TEXT);
    let builder = b.class(&text, "StringBuilder", &[]);
    let string = b.std_type("String");
    let any = b.std_type("Any");
    for arg in [string.clone(), Type::CHAR, any] {
        b.member(&builder, "append", vec![arg], builder.clone());
    }
    b.member(&builder, "toString", Vec::new(), string);
}

fn progressions(b: &mut Builder<'_>) {
    let ranges = b.package(packages::RANGES);
    for (class, element) in [
        ("CharProgression", Type::CHAR),
        ("IntProgression", Type::INT),
        ("LongProgression", Type::LONG),
    ] {
        let owner = b.class(&ranges, class, &[]);
        b.member(&owner, "first", Vec::new(), element.clone());
        b.member(&owner, "last", Vec::new(), element);
    }
}

fn internal(b: &mut Builder<'_>) {
    let internal = b.package(packages::INTERNAL);
    let nothing = b.std_type("Nothing");
    let string = b.std_type("String");

    b.function(&internal, "ThrowNullPointerException", Vec::new(), nothing.clone());
    b.function(
        &internal,
        "ThrowNoWhenBranchMatchedException",
        Vec::new(),
        nothing.clone(),
    );
    b.function(&internal, "ThrowTypeCastException", Vec::new(), nothing.clone());
    b.function(
        &internal,
        "ThrowUninitializedPropertyAccessException",
        vec![string],
        nothing,
    );

    b.class(&internal, "DefaultConstructorMarker", &[]);

    for kind in PrimitiveKind::ALL {
        let ty = Type::Primitive(kind);
        b.function(&internal, "areEqualByValue", vec![ty.clone(), ty], Type::BOOLEAN);
    }
    for ty in [Type::FLOAT, Type::DOUBLE] {
        b.function(&internal, "ieee754Equals", vec![ty.clone(), ty], Type::BOOLEAN);
    }
}

fn reflection(b: &mut Builder<'_>) {
    let reflect = b.package(packages::REFLECT);
    b.class(&reflect, "FunctionReferenceImpl", &[]);
    b.class(&reflect, "Property0Impl", &["R"]);
    b.class(&reflect, "Property1Impl", &["T", "R"]);
    b.class(&reflect, "Property2Impl", &["T1", "T2", "R"]);
    b.class(&reflect, "MutableProperty0Impl", &["R"]);
    b.class(&reflect, "MutableProperty1Impl", &["T", "R"]);
    b.class(&reflect, "MutableProperty2Impl", &["T1", "T2", "R"]);
}
