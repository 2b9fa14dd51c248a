use phf::phf_map;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Assoc {
    Right,
    Left,
}
impl Assoc {
    pub fn is_left(&self) -> bool {
        self == &Assoc::Left
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Operator {
    pub sym: char,
    pub assoc: Assoc,
    pub prec: u8,
}
impl Operator {
    /// Whether `top`, sitting on the operator stack, must be emitted before
    /// `self` is pushed.
    pub fn yields_to(&self, top: &Operator) -> bool {
        if self.assoc.is_left() {
            self.prec <= top.prec
        } else {
            self.prec < top.prec
        }
    }
}

pub fn lookup(sym: char) -> Option<&'static Operator> {
    BINARY_OPERATOR_TABLE.get(&sym)
}

pub fn is_operator(sym: char) -> bool {
    BINARY_OPERATOR_TABLE.contains_key(&sym)
}

pub static BINARY_OPERATOR_TABLE: phf::Map<char, Operator> = phf_map! {
    '+' => Operator {
        prec: 1,
        assoc: Assoc::Left,
        sym: '+',
    },
    '-' => Operator {
        prec: 1,
        assoc: Assoc::Left,
        sym: '-',
    },
    '*' => Operator {
        prec: 2,
        assoc: Assoc::Left,
        sym: '*',
    },
    '/' => Operator {
        prec: 2,
        assoc: Assoc::Left,
        sym: '/',
    },
    '^' => Operator {
        prec: 3,
        assoc: Assoc::Right,
        sym: '^',
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_keys_match_symbols() {
        for (key, op) in BINARY_OPERATOR_TABLE.entries() {
            assert_eq!(*key, op.sym);
        }
        assert_eq!(BINARY_OPERATOR_TABLE.len(), 5);
        assert!(lookup('%').is_none());
        assert!(!is_operator('('));
    }

    #[test]
    fn left_assoc_yields_to_equal_precedence() {
        let (minus, plus, times) = (lookup('-').unwrap(), lookup('+').unwrap(), lookup('*').unwrap());
        assert!(minus.yields_to(plus));
        assert!(minus.yields_to(times));
        assert!(!times.yields_to(minus));
    }

    #[test]
    fn right_assoc_does_not_yield_to_itself() {
        let pow = lookup('^').unwrap();
        assert!(!pow.yields_to(pow));
        assert!(lookup('*').unwrap().yields_to(pow));
        assert!(!pow.yields_to(lookup('*').unwrap()));
    }
}
