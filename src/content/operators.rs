//! Content stream operators relevant to ruling extraction.
//!
//! This module defines the path construction, clipping, painting and
//! graphics-state-stack operators the ruling extractor reacts to, plus the
//! image and shading operators it accepts and ignores. Coordinates are in
//! device space: the interpreter has already applied the current
//! transformation matrix.

use crate::content::graphics_state::WindingRule;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// A content stream operator.
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    // Path construction
    /// Move to (m)
    MoveTo {
        /// X coordinate
        x: f32,
        /// Y coordinate
        y: f32,
    },
    /// Line to (l)
    LineTo {
        /// X coordinate
        x: f32,
        /// Y coordinate
        y: f32,
    },
    /// Cubic Bézier curve (c)
    CurveTo {
        /// X coordinate of first control point
        x1: f32,
        /// Y coordinate of first control point
        y1: f32,
        /// X coordinate of second control point
        x2: f32,
        /// Y coordinate of second control point
        y2: f32,
        /// X coordinate of end point
        x3: f32,
        /// Y coordinate of end point
        y3: f32,
    },
    /// Bézier curve with first control point = current point (v)
    CurveToV {
        /// X coordinate of second control point
        x2: f32,
        /// Y coordinate of second control point
        y2: f32,
        /// X coordinate of end point
        x3: f32,
        /// Y coordinate of end point
        y3: f32,
    },
    /// Bézier curve with second control point = end point (y)
    CurveToY {
        /// X coordinate of first control point
        x1: f32,
        /// Y coordinate of first control point
        y1: f32,
        /// X coordinate of end point
        x3: f32,
        /// Y coordinate of end point
        y3: f32,
    },
    /// Close current subpath (h)
    ClosePath,
    /// Rectangle (re), given as its four device-space corners
    Rectangle {
        /// Corners in drawing order
        corners: [Point; 4],
    },

    // Path painting
    /// Stroke path (S)
    Stroke,
    /// Close and stroke path (s)
    CloseStroke,
    /// Fill path (f, F, f*)
    Fill(WindingRule),
    /// Fill and stroke path (B, B*)
    FillStroke(WindingRule),
    /// Close, fill and stroke path (b, b*)
    CloseFillStroke(WindingRule),
    /// End path without filling or stroking (n)
    EndPath,

    // Clipping
    /// Modify clipping path (W, W*)
    Clip(WindingRule),

    // Graphics state stack
    /// Save graphics state (q)
    SaveState,
    /// Restore graphics state (Q)
    RestoreState,

    // Accepted, never produce rulings
    /// Paint image XObject or inline image (Do, EI)
    DrawImage,
    /// Paint shading (sh)
    ShadingFill,
}

impl Operator {
    /// Build an operator from its content-stream name and numeric operands.
    ///
    /// Operands must already be in device space. `re` keeps its `x y w h`
    /// form and is expanded into four corners here.
    ///
    /// # Example
    ///
    /// ```
    /// use pdf_rulings::content::Operator;
    ///
    /// let op = Operator::from_raw("m", &[10.0, 20.0]).unwrap();
    /// assert_eq!(op, Operator::MoveTo { x: 10.0, y: 20.0 });
    /// assert!(Operator::from_raw("l", &[1.0]).is_err());
    /// ```
    pub fn from_raw(name: &str, operands: &[f32]) -> Result<Operator> {
        let expect = |count: usize| -> Result<()> {
            if operands.len() != count {
                return Err(Error::InvalidOperands {
                    operator: name.to_string(),
                    expected: count,
                    found: operands.len(),
                });
            }
            Ok(())
        };

        let op = match name {
            "m" => {
                expect(2)?;
                Operator::MoveTo {
                    x: operands[0],
                    y: operands[1],
                }
            },
            "l" => {
                expect(2)?;
                Operator::LineTo {
                    x: operands[0],
                    y: operands[1],
                }
            },
            "c" => {
                expect(6)?;
                Operator::CurveTo {
                    x1: operands[0],
                    y1: operands[1],
                    x2: operands[2],
                    y2: operands[3],
                    x3: operands[4],
                    y3: operands[5],
                }
            },
            "v" => {
                expect(4)?;
                Operator::CurveToV {
                    x2: operands[0],
                    y2: operands[1],
                    x3: operands[2],
                    y3: operands[3],
                }
            },
            "y" => {
                expect(4)?;
                Operator::CurveToY {
                    x1: operands[0],
                    y1: operands[1],
                    x3: operands[2],
                    y3: operands[3],
                }
            },
            "re" => {
                expect(4)?;
                let (x, y, w, h) = (operands[0], operands[1], operands[2], operands[3]);
                Operator::Rectangle {
                    corners: [
                        Point::new(x, y),
                        Point::new(x + w, y),
                        Point::new(x + w, y + h),
                        Point::new(x, y + h),
                    ],
                }
            },
            _ => {
                expect(0)?;
                match name {
                    "h" => Operator::ClosePath,
                    "S" => Operator::Stroke,
                    "s" => Operator::CloseStroke,
                    "f" | "F" => Operator::Fill(WindingRule::NonZero),
                    "f*" => Operator::Fill(WindingRule::EvenOdd),
                    "B" => Operator::FillStroke(WindingRule::NonZero),
                    "B*" => Operator::FillStroke(WindingRule::EvenOdd),
                    "b" => Operator::CloseFillStroke(WindingRule::NonZero),
                    "b*" => Operator::CloseFillStroke(WindingRule::EvenOdd),
                    "n" => Operator::EndPath,
                    "W" => Operator::Clip(WindingRule::NonZero),
                    "W*" => Operator::Clip(WindingRule::EvenOdd),
                    "q" => Operator::SaveState,
                    "Q" => Operator::RestoreState,
                    // XObject and shading names are not numeric; callers drop them.
                    "Do" | "EI" => Operator::DrawImage,
                    "sh" => Operator::ShadingFill,
                    _ => return Err(Error::UnknownOperator(name.to_string())),
                }
            },
        };
        Ok(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_construction_operators() {
        assert_eq!(
            Operator::from_raw("l", &[3.0, 4.0]).unwrap(),
            Operator::LineTo { x: 3.0, y: 4.0 }
        );
        assert_eq!(
            Operator::from_raw("c", &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap(),
            Operator::CurveTo {
                x1: 1.0,
                y1: 2.0,
                x2: 3.0,
                y2: 4.0,
                x3: 5.0,
                y3: 6.0
            }
        );
        assert_eq!(
            Operator::from_raw("v", &[1.0, 2.0, 3.0, 4.0]).unwrap(),
            Operator::CurveToV {
                x2: 1.0,
                y2: 2.0,
                x3: 3.0,
                y3: 4.0
            }
        );
        assert_eq!(Operator::from_raw("h", &[]).unwrap(), Operator::ClosePath);
    }

    #[test]
    fn test_rectangle_expands_to_corners() {
        let op = Operator::from_raw("re", &[10.0, 20.0, 100.0, 50.0]).unwrap();
        match op {
            Operator::Rectangle { corners } => {
                assert_eq!(corners[0], Point::new(10.0, 20.0));
                assert_eq!(corners[1], Point::new(110.0, 20.0));
                assert_eq!(corners[2], Point::new(110.0, 70.0));
                assert_eq!(corners[3], Point::new(10.0, 70.0));
            },
            _ => panic!("Expected Rectangle operator"),
        }
    }

    #[test]
    fn test_painting_and_clipping_operators() {
        assert_eq!(Operator::from_raw("S", &[]).unwrap(), Operator::Stroke);
        assert_eq!(
            Operator::from_raw("F", &[]).unwrap(),
            Operator::Fill(WindingRule::NonZero)
        );
        assert_eq!(
            Operator::from_raw("f*", &[]).unwrap(),
            Operator::Fill(WindingRule::EvenOdd)
        );
        assert_eq!(
            Operator::from_raw("b*", &[]).unwrap(),
            Operator::CloseFillStroke(WindingRule::EvenOdd)
        );
        assert_eq!(
            Operator::from_raw("W*", &[]).unwrap(),
            Operator::Clip(WindingRule::EvenOdd)
        );
        assert_eq!(Operator::from_raw("n", &[]).unwrap(), Operator::EndPath);
        assert_eq!(Operator::from_raw("q", &[]).unwrap(), Operator::SaveState);
    }

    #[test]
    fn test_operand_count_validation() {
        let err = Operator::from_raw("re", &[1.0, 2.0, 3.0]).unwrap_err();
        match err {
            Error::InvalidOperands {
                operator,
                expected,
                found,
            } => {
                assert_eq!(operator, "re");
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            },
            other => panic!("Unexpected error: {}", other),
        }
        assert!(Operator::from_raw("S", &[1.0]).is_err());
    }

    #[test]
    fn test_unknown_operator() {
        assert!(matches!(
            Operator::from_raw("Tj", &[]),
            Err(Error::UnknownOperator(_))
        ));
    }

    #[test]
    fn test_image_and_shading_names_drop_operand() {
        // The XObject or shading name is not numeric, so no operands arrive
        assert_eq!(Operator::from_raw("Do", &[]).unwrap(), Operator::DrawImage);
        assert_eq!(Operator::from_raw("EI", &[]).unwrap(), Operator::DrawImage);
        assert_eq!(Operator::from_raw("sh", &[]).unwrap(), Operator::ShadingFill);
    }
}
